//! Statistics aggregation over claim snapshots.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::types::{
    AmountTotals, CategoryBreakdown, CurrencyBreakdown, ExpenseStatistics, StatusCounts,
    StatusCurrencyBreakdown, TrendPoint,
};
use crate::ledger::Expense;
use crate::workflow::ExpenseStatus;

/// Window used by [`AggregationEngine::recent_trend`].
pub const DEFAULT_TREND_DAYS: u64 = 7;

/// Stateless aggregation engine.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Compute the full statistics snapshot for a set of claims.
    ///
    /// All USD figures sum the `usd_amount` frozen at submission time;
    /// nothing is re-converted. Breakdowns come back sorted by key so
    /// output is deterministic.
    #[must_use]
    pub fn summarize(expenses: &[Expense]) -> ExpenseStatistics {
        let mut counts = StatusCounts {
            total: expenses.len(),
            ..StatusCounts::default()
        };
        let mut totals = AmountTotals::default();

        let mut categories: BTreeMap<&str, (usize, Decimal)> = BTreeMap::new();
        let mut currencies: BTreeMap<&str, (usize, Decimal, Decimal)> = BTreeMap::new();
        let mut cells: BTreeMap<(&'static str, &str), (usize, Decimal, Decimal)> = BTreeMap::new();

        for expense in expenses {
            match expense.status {
                ExpenseStatus::Pending => {
                    counts.pending += 1;
                    totals.pending_usd += expense.usd_amount;
                }
                ExpenseStatus::Approved => {
                    counts.approved += 1;
                    totals.approved_usd += expense.usd_amount;
                }
                ExpenseStatus::Rejected => counts.rejected += 1,
            }
            totals.total_usd += expense.usd_amount;

            let cat = categories.entry(expense.category.as_str()).or_default();
            cat.0 += 1;
            cat.1 += expense.usd_amount;

            let cur = currencies
                .entry(expense.currency_code.as_str())
                .or_default();
            cur.0 += 1;
            cur.1 += expense.amount;
            cur.2 += expense.usd_amount;

            let cell = cells
                .entry((expense.status.as_str(), expense.currency_code.as_str()))
                .or_default();
            cell.0 += 1;
            cell.1 += expense.amount;
            cell.2 += expense.usd_amount;
        }

        ExpenseStatistics {
            counts,
            totals,
            by_category: categories
                .into_iter()
                .map(|(category, (count, usd_total))| CategoryBreakdown {
                    category: category.to_string(),
                    count,
                    usd_total,
                })
                .collect(),
            by_currency: currencies
                .into_iter()
                .map(
                    |(code, (count, original_total, usd_total))| CurrencyBreakdown {
                        currency_code: code.to_string(),
                        count,
                        original_total,
                        usd_total,
                    },
                )
                .collect(),
            by_status_currency: cells
                .into_iter()
                .map(
                    |((status, code), (count, original_total, usd_total))| {
                        StatusCurrencyBreakdown {
                            // keys came from as_str, parse cannot miss
                            status: ExpenseStatus::parse(status).unwrap_or(ExpenseStatus::Pending),
                            currency_code: code.to_string(),
                            count,
                            original_total,
                            usd_total,
                        }
                    },
                )
                .collect(),
        }
    }

    /// Daily submitted USD spend over the last [`DEFAULT_TREND_DAYS`]
    /// days, ending today.
    #[must_use]
    pub fn recent_trend(expenses: &[Expense]) -> Vec<TrendPoint> {
        Self::daily_trend(expenses, DEFAULT_TREND_DAYS, Utc::now().date_naive())
    }

    /// Daily submitted USD spend over a trailing window ending at
    /// `end_date`.
    ///
    /// Returns exactly `days` points in ascending date order, one per
    /// calendar day, with zero totals for days without claims. Days are
    /// submission days (`created_at`), not expense dates, so the trend
    /// reflects filing activity. Labels are "MM-DD".
    #[must_use]
    pub fn daily_trend(expenses: &[Expense], days: u64, end_date: NaiveDate) -> Vec<TrendPoint> {
        if days == 0 {
            return Vec::new();
        }
        let start = end_date
            .checked_sub_days(Days::new(days - 1))
            .unwrap_or(NaiveDate::MIN);

        let mut per_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for expense in expenses {
            let submitted = expense.created_at.date_naive();
            if submitted >= start && submitted <= end_date {
                *per_day.entry(submitted).or_default() += expense.usd_amount;
            }
        }

        start
            .iter_days()
            .take_while(|d| *d <= end_date)
            .map(|date| TrendPoint {
                date,
                label: date.format("%m-%d").to_string(),
                usd_total: per_day.get(&date).copied().unwrap_or_default(),
            })
            .collect()
    }
}
