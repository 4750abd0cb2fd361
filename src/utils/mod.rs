//! Output helpers

pub mod display;

pub use display::{Color, ColorOutput, ProgressIndicator, ReportFormatter};
