//! Configuration settings for the zero forcing explorer

use crate::subset::SubsetId;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub input: InputConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Graph description; read from stdin when absent
    pub graph_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Largest accepted vertex count; the run materializes 2^n subsets
    pub max_vertices: usize,
    pub show_progress: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Include every subset of the vertex set in the report
    pub show_catalog: bool,
    /// Where to save the report; nothing is saved when absent
    pub output_directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: InputConfig { graph_file: None },
            analysis: AnalysisConfig {
                max_vertices: 20,
                show_progress: false,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_catalog: true,
                output_directory: None,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// Only parses; call [`Settings::validate`] once command line overrides
    /// have been merged.
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.analysis.max_vertices == 0 {
            anyhow::bail!("Maximum vertex count must be positive");
        }

        if self.analysis.max_vertices > SubsetId::MAX_VERTICES {
            anyhow::bail!(
                "Maximum vertex count {} exceeds the supported limit of {}",
                self.analysis.max_vertices,
                SubsetId::MAX_VERTICES
            );
        }

        if let Some(ref graph_file) = self.input.graph_file {
            if !graph_file.exists() {
                anyhow::bail!("Graph file does not exist: {}", graph_file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref graph_file) = cli_overrides.graph_file {
            self.input.graph_file = Some(graph_file.clone());
        }
        if let Some(max_vertices) = cli_overrides.max_vertices {
            self.analysis.max_vertices = max_vertices;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(show_catalog) = cli_overrides.show_catalog {
            self.output.show_catalog = show_catalog;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = Some(output_dir.clone());
        }
        if cli_overrides.show_progress {
            self.analysis.show_progress = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub graph_file: Option<PathBuf>,
    pub max_vertices: Option<usize>,
    pub format: Option<OutputFormat>,
    pub show_catalog: Option<bool>,
    pub output_dir: Option<PathBuf>,
    pub show_progress: bool,
}
