//! Error types for notebook cleaning operations

use std::path::PathBuf;
use thiserror::Error;

/// Error type for notebook cleaning operations
#[derive(Error, Debug)]
pub enum NotebookError {
    /// Input notebook file does not exist
    #[error("Notebook file not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// I/O error when reading notebook file
    #[error("Failed to read notebook file: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("Failed to parse notebook JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Notebook version not supported
    #[error("Unsupported notebook version: {major}.{minor}")]
    UnsupportedVersion {
        /// Major version number
        major: u64,
        /// Minor version number
        minor: u64,
    },

    /// Output file cannot be created or written
    #[error("Failed to write cleaned notebook to {}: {source}", path.display())]
    WriteFailed {
        /// Output path that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result type alias for notebook cleaning operations
pub type Result<T> = std::result::Result<T, NotebookError>;
