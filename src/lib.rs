//! Zero Forcing Explorer
//!
//! Enumerates every vertex subset of a small graph, decides which ones are
//! zero forcing under the color-change rule, and derives the minimal zero
//! forcing sets and the zero forcing number.

pub mod config;
pub mod forcing;
pub mod graph;
pub mod subset;
pub mod utils;

pub use config::Settings;
pub use forcing::{ZeroForcingProblem, ZeroForcingReport};
pub use graph::Graph;
pub use subset::{Subset, SubsetId};

use anyhow::Result;

/// Main entry point: load the configured graph and run the full analysis
pub fn analyze(settings: Settings) -> Result<ZeroForcingReport> {
    let mut problem = ZeroForcingProblem::new(settings)?;
    Ok(problem.solve())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_analyze_cycle_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("cycle4.txt");
        std::fs::write(&path, "4\n4\n0 1\n1 2\n2 3\n3 0\n").unwrap();

        let mut settings = Settings::default();
        settings.input.graph_file = Some(path);

        let report = analyze(settings).unwrap();
        assert_eq!(report.vertex_count, 4);
        assert_eq!(report.summary.zero_forcing_number, Some(2));
        assert_eq!(report.catalog.map(|c| c.len()), Some(16));
    }
}
