//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// A comma-separated list could not be parsed.
    #[error("Invalid number list: {0}")]
    InvalidList(String),

    /// Pillar lists of different lengths.
    #[error("{xs} x values but {ys} y values")]
    LengthMismatch {
        /// Number of x values.
        xs: usize,
        /// Number of y values.
        ys: usize,
    },

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Configuration error.
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// Configuration file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
