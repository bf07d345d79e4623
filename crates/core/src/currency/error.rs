//! Currency error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during currency registry operations.
#[derive(Debug, Error)]
pub enum CurrencyError {
    /// A currency with this code is already registered.
    #[error("Currency code {0} already exists")]
    CodeExists(String),

    /// Exchange rate must be positive.
    #[error("Exchange rate {0} must be greater than zero")]
    NonPositiveRate(Decimal),

    /// Currency not found.
    #[error("Currency {0} not found")]
    NotFound(String),

    /// Attempted to reactivate a currency that is already active.
    #[error("Currency {0} is already active")]
    AlreadyActive(String),

    /// A required field was missing or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl CurrencyError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::CodeExists(_) | Self::AlreadyActive(_) => 409,
            Self::NonPositiveRate(_) | Self::MissingField(_) => 400,
            Self::NotFound(_) => 404,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CodeExists(_) => "CURRENCY_CODE_EXISTS",
            Self::NonPositiveRate(_) => "NON_POSITIVE_RATE",
            Self::NotFound(_) => "CURRENCY_NOT_FOUND",
            Self::AlreadyActive(_) => "CURRENCY_ALREADY_ACTIVE",
            Self::MissingField(_) => "MISSING_FIELD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CurrencyError::CodeExists("EUR".into()).error_code(),
            "CURRENCY_CODE_EXISTS"
        );
        assert_eq!(
            CurrencyError::NonPositiveRate(Decimal::ZERO).status_code(),
            400
        );
        assert_eq!(CurrencyError::NotFound("XXX".into()).status_code(), 404);
    }
}
