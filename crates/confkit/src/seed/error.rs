//! Error types for first-run seeding.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for seeding operations.
pub type SeedResult<T> = Result<T, SeedError>;

/// Errors that can occur while seeding the user configuration library.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Failed to create the user configuration library directory.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a seed file.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
