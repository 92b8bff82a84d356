//! Error types for configuration loading.
//!
//! This module defines all errors that can occur while resolving,
//! reading, parsing, and shaping user configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The platform reported no home directory for the current user.
    #[error("Could not determine the current user's home directory")]
    HomeDirUnavailable,

    /// Failed to read a configuration file from disk.
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse YAML file at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The parsed document does not have the expected mapping shape.
    #[error("Bad config data in {path}: {reason}")]
    BadConfigData { path: PathBuf, reason: String },

    /// A top-level entry could not be deserialized into the record type.
    #[error("Failed to build record for key '{key}' in {path}: {source}")]
    RecordBuild {
        path: PathBuf,
        key: String,
        source: serde_yaml::Error,
    },

    /// Failed to copy a library default into the user directory.
    #[error("Failed to copy {from} to {to}: {source}")]
    FileCopy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the user configuration directory.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Type alias for Result with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
