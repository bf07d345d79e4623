//! Statistics result types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::workflow::ExpenseStatus;

/// Claim counts by workflow status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Total number of claims
    pub total: usize,
    /// Claims awaiting review
    pub pending: usize,
    /// Approved claims
    pub approved: usize,
    /// Rejected claims
    pub rejected: usize,
}

/// USD sums by workflow status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AmountTotals {
    /// USD sum over all claims
    pub total_usd: Decimal,
    /// USD sum over approved claims
    pub approved_usd: Decimal,
    /// USD sum over pending claims
    pub pending_usd: Decimal,
}

/// Per-category rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    /// Category name
    pub category: String,
    /// Number of claims in the category
    pub count: usize,
    /// USD sum for the category
    pub usd_total: Decimal,
}

/// Per-currency rollup, keeping both denominations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyBreakdown {
    /// Original currency code
    pub currency_code: String,
    /// Number of claims in the currency
    pub count: usize,
    /// Sum in the original currency
    pub original_total: Decimal,
    /// Sum normalized to USD
    pub usd_total: Decimal,
}

/// Status x currency cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCurrencyBreakdown {
    /// Workflow status
    pub status: ExpenseStatus,
    /// Original currency code
    pub currency_code: String,
    /// Number of claims in the cell
    pub count: usize,
    /// Sum in the original currency
    pub original_total: Decimal,
    /// USD sum for the cell
    pub usd_total: Decimal,
}

/// One day on the spend trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Display label, "MM-DD"
    pub label: String,
    /// USD sum for the day (zero when no claims)
    pub usd_total: Decimal,
}

/// Full statistics snapshot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExpenseStatistics {
    /// Counts by status
    pub counts: StatusCounts,
    /// USD sums by status
    pub totals: AmountTotals,
    /// Rollup per category, sorted by name
    pub by_category: Vec<CategoryBreakdown>,
    /// Rollup per currency, sorted by code
    pub by_currency: Vec<CurrencyBreakdown>,
    /// Status x currency cells, sorted by (status, code)
    pub by_status_currency: Vec<StatusCurrencyBreakdown>,
}
