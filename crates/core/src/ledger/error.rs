//! Error types for the expense ledger.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ids::ExpenseId;
use crate::workflow::WorkflowError;

/// Errors from expense ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A required field was empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Amount must be greater than zero
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Exchange rate must be greater than zero
    #[error("Exchange rate must be positive, got {0}")]
    NonPositiveRate(Decimal),

    /// At least one receipt is required
    #[error("At least one attachment is required")]
    NoAttachments,

    /// Attachment extension not on the accept list
    #[error("Unsupported attachment type: {0}")]
    UnsupportedAttachmentType(String),

    /// Actor is not allowed to perform the operation on this claim
    #[error("Permission denied: {0}")]
    PermissionDenied(&'static str),

    /// No claim with the given ID
    #[error("Expense not found: {0}")]
    NotFound(ExpenseId),

    /// Workflow transition rejected
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// A mutation could not be committed as a whole.
    ///
    /// Unreachable with the in-memory ledger, which commits every
    /// mutation under one write lock; a persistent backend maps its
    /// partial-write failures here so callers can roll back.
    #[error("Integrity failure: {0}")]
    Integrity(String),
}

impl LedgerError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingField(_)
            | Self::NonPositiveAmount(_)
            | Self::NonPositiveRate(_)
            | Self::NoAttachments
            | Self::UnsupportedAttachmentType(_) => 400,
            Self::PermissionDenied(_) => 403,
            Self::NotFound(_) => 404,
            Self::Workflow(e) => e.status_code(),
            Self::Integrity(_) => 500,
        }
    }

    /// Get error code string for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::NonPositiveRate(_) => "NON_POSITIVE_RATE",
            Self::NoAttachments => "NO_ATTACHMENTS",
            Self::UnsupportedAttachmentType(_) => "UNSUPPORTED_ATTACHMENT_TYPE",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::NotFound(_) => "EXPENSE_NOT_FOUND",
            Self::Workflow(e) => e.error_code(),
            Self::Integrity(_) => "INTEGRITY_FAILURE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_codes() {
        assert_eq!(LedgerError::MissingField("title").status_code(), 400);
        assert_eq!(
            LedgerError::NonPositiveAmount(dec!(-5)).status_code(),
            400
        );
        assert_eq!(LedgerError::PermissionDenied("owner only").status_code(), 403);
        assert_eq!(LedgerError::NotFound(ExpenseId::new()).status_code(), 404);

        let integrity = LedgerError::Integrity("orphaned attachment rows".to_string());
        assert_eq!(integrity.status_code(), 500);
        assert_eq!(integrity.error_code(), "INTEGRITY_FAILURE");
    }

    #[test]
    fn test_workflow_error_passthrough() {
        use crate::workflow::ExpenseStatus;
        let err = LedgerError::Workflow(WorkflowError::InvalidTransition {
            from: ExpenseStatus::Approved,
            to: ExpenseStatus::Approved,
        });
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
    }
}
