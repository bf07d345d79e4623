//! Error types for receipt storage.

use thiserror::Error;

/// Errors from receipt store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Nothing stored under the given name
    #[error("File not found: {0}")]
    NotFound(String),

    /// Backend failure (disk, network)
    #[error("Storage I/O error: {0}")]
    Io(String),
}

impl StorageError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Io(_) => 500,
        }
    }

    /// Get error code string for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "FILE_NOT_FOUND",
            Self::Io(_) => "STORAGE_IO_ERROR",
        }
    }
}
