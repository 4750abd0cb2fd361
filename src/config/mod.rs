//! Configuration management for the zero forcing explorer

pub mod settings;

pub use settings::{
    Settings, InputConfig, AnalysisConfig, OutputConfig, OutputFormat, CliOverrides
};
