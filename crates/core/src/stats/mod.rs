//! Aggregation engine for expense statistics.
//!
//! Pure fold over a claim snapshot: status counts, USD totals,
//! per-category and per-currency breakdowns, and a zero-filled daily
//! trend. No stored state; callers pass the snapshot they already hold.

pub mod engine;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::{AggregationEngine, DEFAULT_TREND_DAYS};
pub use types::{
    AmountTotals, CategoryBreakdown, CurrencyBreakdown, ExpenseStatistics, StatusCounts,
    StatusCurrencyBreakdown, TrendPoint,
};
