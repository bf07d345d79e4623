//! Workflow error types.

use thiserror::Error;

use crate::workflow::types::ExpenseStatus;

/// Errors that can occur during workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: ExpenseStatus,
        /// The attempted target status.
        to: ExpenseStatus,
    },

    /// Only administrators may approve or reject claims.
    #[error("Admin privilege is required to {action} a claim")]
    AdminRequired {
        /// The attempted action ("approve" or "reject").
        action: &'static str,
    },
}

impl WorkflowError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. } => 400,
            Self::AdminRequired { .. } => 403,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::AdminRequired { .. } => "ADMIN_REQUIRED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_error() {
        let err = WorkflowError::InvalidTransition {
            from: ExpenseStatus::Approved,
            to: ExpenseStatus::Approved,
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("approved"));
    }

    #[test]
    fn test_admin_required_error() {
        let err = WorkflowError::AdminRequired { action: "approve" };
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "ADMIN_REQUIRED");
    }
}
