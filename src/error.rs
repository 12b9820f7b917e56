//! Error types for tasktrack.
//!
//! Every failure is terminal for the invocation: operations return `Result`
//! and `main` maps any error to exit code 1. Exit code 0 is reserved for
//! success (including `--help`/`--version`).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tasktrack operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Task with ID {0} not found!")]
    NotFound(u64),

    /// The requested status transition is a no-op.
    #[error("Task with ID {id} is already {state}!")]
    State { id: u64, state: &'static str },

    #[error("Failed to parse task database {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tasktrack operations.
pub type Result<T> = std::result::Result<T, Error>;
