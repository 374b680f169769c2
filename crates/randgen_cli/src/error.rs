//! CLI error types.

use randgen_core::RandGenError;
use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the `randgen` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or deserialised.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Error from the generator library.
    #[error(transparent)]
    RandGen(#[from] RandGenError),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Known-answer self test found mismatches.
    #[error("Self test failed: {0} check(s) did not match")]
    CheckFailed(usize),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Worker pool could not be started.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
