//! USD normalization arithmetic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Always round USD amounts to 2 decimal places
//! - Use banker's rounding (round half to even)
//! - Store both original and normalized amounts

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on normalized USD amounts.
pub const USD_DECIMAL_PLACES: u32 = 2;

/// Normalizes an original-currency amount to USD.
///
/// The rate means units of the original currency per 1 USD, so the
/// normalized amount is `amount / rate`. USD amounts pass through
/// unchanged apart from rounding. Uses banker's rounding (round half to
/// even) to minimize cumulative errors.
#[must_use]
pub fn usd_normalize(amount: Decimal, rate: Decimal, currency_code: &str) -> Decimal {
    let normalized = if currency_code == "USD" {
        amount
    } else {
        amount / rate
    };
    normalized.round_dp_with_strategy(USD_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_normalize_eur() {
        // 100 EUR at 0.9091 EUR per USD ~= 110.00 USD
        let result = usd_normalize(dec!(100), dec!(0.9091), "EUR");
        assert_eq!(result, dec!(110.00));
    }

    #[test]
    fn test_normalize_usd_passthrough() {
        // USD ignores the rate entirely
        let result = usd_normalize(dec!(50), dec!(7.25), "USD");
        assert_eq!(result, dec!(50.00));
    }

    #[test]
    fn test_normalize_cny() {
        let result = usd_normalize(dec!(725), dec!(7.25), "CNY");
        assert_eq!(result, dec!(100.00));
    }

    #[test]
    fn test_bankers_rounding() {
        // 0.125 rounds to 0.12 (half to even), 0.135 rounds to 0.14
        assert_eq!(usd_normalize(dec!(0.125), dec!(1), "EUR"), dec!(0.12));
        assert_eq!(usd_normalize(dec!(0.135), dec!(1), "EUR"), dec!(0.14));
    }
}
