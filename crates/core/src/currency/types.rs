//! Currency domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency known to the registry.
///
/// `rate` means: this many units of the currency equal 1 USD.
/// USD itself always has rate 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    /// ISO-style currency code (e.g. "USD", "CNY").
    pub code: String,
    /// Display name (e.g. "US Dollar").
    pub name: String,
    /// Display symbol (e.g. "$").
    pub symbol: String,
    /// Units of this currency per 1 USD. Always positive.
    pub rate: Decimal,
    /// Whether the currency is available for new submissions.
    pub active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Outcome of a remove-or-deactivate operation.
///
/// Reference data that is still in use is soft-deactivated so historical
/// records keep resolving; unreferenced entries are removed outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Removal {
    /// Entry was marked inactive because expenses still reference it.
    Deactivated,
    /// Entry was removed entirely.
    Deleted,
}
