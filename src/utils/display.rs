//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::forcing::{CheckResult, SubsetRecord, ZeroForcingReport};
use crate::graph::PropagationRound;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// Format reports for display
pub struct ReportFormatter;

impl ReportFormatter {
    /// `id:` followed by a tab and the vertices in increasing order
    pub fn format_subset(record: &SubsetRecord) -> String {
        format!("{}:\t{}", record.id, record.vertices.iter().join(" "))
    }

    fn format_subsets(records: &[SubsetRecord]) -> String {
        let mut output = String::new();
        for record in records {
            output.push_str(&Self::format_subset(record));
            output.push('\n');
        }
        output
    }

    /// Plain-text report: catalog (when present), families, then the summary
    pub fn format_report(report: &ZeroForcingReport) -> String {
        let mut output = String::new();

        if let Some(ref catalog) = report.catalog {
            output.push_str("All subsets sorted by id:\n");
            output.push_str(&Self::format_subsets(catalog));
            output.push('\n');
        }

        output.push_str("All zero forcing subsets:\n");
        output.push_str(&Self::format_subsets(&report.zero_forcing_sets));
        output.push('\n');

        output.push_str("All minimal zero forcing subsets:\n");
        output.push_str(&Self::format_subsets(&report.minimal_zero_forcing_sets));
        output.push('\n');

        output.push_str(&report.summary.to_string());
        output.push('\n');
        output
    }

    /// One line per propagation round, listing its forces
    pub fn format_rounds(rounds: &[PropagationRound]) -> String {
        let mut output = String::new();
        for (i, round) in rounds.iter().enumerate() {
            let forces = round
                .forces
                .iter()
                .map(|force| format!("{} -> {}", force.forcer, force.forced))
                .join(", ");
            output.push_str(&format!(
                "Round {}: {} => {{{}}}\n",
                i + 1,
                forces,
                round.after.vertices().join(", ")
            ));
        }
        output
    }

    /// Check result followed by the rounds that led to it
    pub fn format_check(result: &CheckResult, show_rounds: bool) -> String {
        let mut output = result.to_string();
        if show_rounds && !result.rounds.is_empty() {
            output.push_str("\nPropagation:\n");
            output.push_str(&Self::format_rounds(&result.rounds));
        }
        output
    }

    /// Save a report in the requested format and return the written path
    pub fn save_report<P: AsRef<Path>>(
        report: &ZeroForcingReport,
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<PathBuf> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        let path = match format {
            OutputFormat::Text => {
                let path = output_dir.join("zero_forcing_report.txt");
                std::fs::write(&path, Self::format_report(report))?;
                path
            }
            OutputFormat::Json => {
                let path = output_dir.join("zero_forcing_report.json");
                report.save_to_file(&path)?;
                path
            }
        };

        Ok(path)
    }
}

/// Progress indicator for long-running operations
pub struct ProgressIndicator {
    total: usize,
    current: usize,
    last_update: std::time::Instant,
    start_time: std::time::Instant,
}

impl ProgressIndicator {
    /// Create a new progress indicator
    pub fn new(total: usize) -> Self {
        let now = std::time::Instant::now();
        Self {
            total,
            current: 0,
            last_update: now,
            start_time: now,
        }
    }

    /// Update progress and optionally display
    pub fn update(&mut self, current: usize) {
        self.current = current;
        let now = std::time::Instant::now();

        // Update display every 100ms
        if now.duration_since(self.last_update).as_millis() > 100 {
            self.display();
            self.last_update = now;
        }
    }

    /// Display current progress on stderr so stdout stays clean for the report
    pub fn display(&self) {
        let percentage = if self.total > 0 {
            (self.current as f64 / self.total as f64) * 100.0
        } else {
            0.0
        };

        let elapsed = self.start_time.elapsed();
        let eta = if self.current > 0 {
            let rate = self.current as f64 / elapsed.as_secs_f64();
            let remaining = self.total.saturating_sub(self.current) as f64 / rate;
            format!("ETA: {:.1}s", remaining)
        } else {
            "ETA: --".to_string()
        };

        eprint!("\rClassified: {}/{} ({:.1}%) - {}",
               self.current, self.total, percentage, eta);
        std::io::Write::flush(&mut std::io::stderr()).ok();
    }

    /// Finish and clear the progress line
    pub fn finish(&self) {
        eprintln!("\rCompleted: {}/{} (100.0%) - Total time: {:.1}s",
                self.total, self.total, self.start_time.elapsed().as_secs_f64());
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
