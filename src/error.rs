//! Error types for manifest-bump.
//!
//! All operations return `Result<T>` which aliases `Result<T, BumpError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from bump operations.
#[derive(Debug, Error)]
pub enum BumpError {
    /// Manifest could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest could not be written back.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target version is not made of digits and dots.
    #[error("Invalid target version '{0}': expected digits and dots, e.g. 5.0 or 3.12.0")]
    InvalidVersion(String),

    /// Some manifests failed under `--keep-going`.
    #[error("{0} manifest(s) could not be bumped")]
    Failed(usize),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for manifest-bump operations.
pub type Result<T> = std::result::Result<T, BumpError>;
