//! Category error types.

use thiserror::Error;

/// Errors that can occur during category registry operations.
#[derive(Debug, Error)]
pub enum CategoryError {
    /// A category with this name already exists.
    #[error("Category {0} already exists")]
    NameExists(String),

    /// Category not found.
    #[error("Category {0} not found")]
    NotFound(String),

    /// Attempted to reactivate a category that is already active.
    #[error("Category {0} is already active")]
    AlreadyActive(String),

    /// Category name was missing or empty.
    #[error("Category name is required")]
    NameRequired,
}

impl CategoryError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NameExists(_) | Self::AlreadyActive(_) => 409,
            Self::NotFound(_) => 404,
            Self::NameRequired => 400,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NameExists(_) => "CATEGORY_NAME_EXISTS",
            Self::NotFound(_) => "CATEGORY_NOT_FOUND",
            Self::AlreadyActive(_) => "CATEGORY_ALREADY_ACTIVE",
            Self::NameRequired => "CATEGORY_NAME_REQUIRED",
        }
    }
}
