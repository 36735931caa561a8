//! # IO Errors

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for the writers.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while writing output files.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Refusing to write an empty mesh
    #[error("Cannot export empty mesh to {path}")]
    EmptyMesh { path: PathBuf },

    /// The mesh could not be converted for the target format
    #[error("Invalid content: {message}")]
    InvalidContent { message: String },
}

impl IoError {
    /// Creates an invalid content error.
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
