//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading the trade table
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("No valid trade records in {path} ({rejected} rows rejected)")]
    NoValidRecords { path: String, rejected: usize },
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chart width too small: {0}px (minimum {1}px)")]
    TooNarrow(usize, usize),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Unknown flow name given where `imports` or `exports` was expected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown flow '{0}': expected 'imports' or 'exports'")]
pub struct ParseFlowError(pub String);
