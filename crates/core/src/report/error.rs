//! Error types for report generation.

use thiserror::Error;

/// Errors from report composition.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Start date is after end date
    #[error("Invalid date range: start is after end")]
    InvalidDateRange,

    /// Workbook construction failed
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

impl ReportError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidDateRange => 400,
            Self::Workbook(_) => 500,
        }
    }

    /// Get error code string for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange => "INVALID_DATE_RANGE",
            Self::Workbook(_) => "WORKBOOK_ERROR",
        }
    }
}
