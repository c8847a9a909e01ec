//! Error types for benchsumlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting results
#[derive(Error, Debug)]
pub enum BenchsumError {
    /// Results directory does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Results path exists but cannot be listed as a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Failed to read a results file (including directory entries that are not files)
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Results file is not valid UTF-8 text
    #[error("file '{path}' is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        source: std::str::Utf8Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
