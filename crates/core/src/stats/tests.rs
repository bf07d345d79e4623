//! Tests for the aggregation engine.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::engine::{AggregationEngine, DEFAULT_TREND_DAYS};
use crate::ids::{ExpenseId, UserId};
use crate::ledger::Expense;
use crate::workflow::ExpenseStatus;

fn expense(
    amount: Decimal,
    currency: &str,
    usd: Decimal,
    category: &str,
    status: ExpenseStatus,
    date: NaiveDate,
) -> Expense {
    // Submitted at noon on the expense date, so trend tests can key on it
    let now = date.and_hms_opt(12, 0, 0).unwrap().and_utc();
    Expense {
        id: ExpenseId::new(),
        title: "t".to_string(),
        description: String::new(),
        amount,
        currency_code: currency.to_string(),
        exchange_rate: dec!(1),
        usd_amount: usd,
        category: category.to_string(),
        expense_date: date,
        status,
        approval_comment: None,
        approved_by: None,
        approved_at: None,
        owner: UserId::new(),
        created_at: now,
        updated_at: now,
        attachments: vec![],
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, d).unwrap()
}

#[test]
fn test_summarize_counts_and_totals() {
    let expenses = vec![
        expense(dec!(100), "EUR", dec!(110.00), "Lodging", ExpenseStatus::Approved, day(1)),
        expense(dec!(50), "USD", dec!(50.00), "Fuel", ExpenseStatus::Pending, day(2)),
        expense(dec!(712), "CNY", dec!(100.00), "Fuel", ExpenseStatus::Rejected, day(3)),
    ];

    let stats = AggregationEngine::summarize(&expenses);

    assert_eq!(stats.counts.total, 3);
    assert_eq!(stats.counts.pending, 1);
    assert_eq!(stats.counts.approved, 1);
    assert_eq!(stats.counts.rejected, 1);

    // Rejected claims still count toward the grand total
    assert_eq!(stats.totals.total_usd, dec!(260.00));
    assert_eq!(stats.totals.approved_usd, dec!(110.00));
    assert_eq!(stats.totals.pending_usd, dec!(50.00));
}

#[test]
fn test_per_currency_usd_sums_to_total() {
    let expenses = vec![
        expense(dec!(100), "EUR", dec!(110.00), "Lodging", ExpenseStatus::Approved, day(1)),
        expense(dec!(200), "EUR", dec!(220.00), "Fuel", ExpenseStatus::Pending, day(2)),
        expense(dec!(50), "USD", dec!(50.00), "Fuel", ExpenseStatus::Pending, day(3)),
    ];

    let stats = AggregationEngine::summarize(&expenses);

    let by_currency_sum: Decimal = stats.by_currency.iter().map(|c| c.usd_total).sum();
    assert_eq!(by_currency_sum, stats.totals.total_usd);

    // Sorted by code, both denominations preserved
    assert_eq!(stats.by_currency[0].currency_code, "EUR");
    assert_eq!(stats.by_currency[0].count, 2);
    assert_eq!(stats.by_currency[0].original_total, dec!(300));
    assert_eq!(stats.by_currency[0].usd_total, dec!(330.00));
    assert_eq!(stats.by_currency[1].currency_code, "USD");
}

#[test]
fn test_category_breakdown_sorted() {
    let expenses = vec![
        expense(dec!(10), "USD", dec!(10), "Rent", ExpenseStatus::Pending, day(1)),
        expense(dec!(20), "USD", dec!(20), "Fuel", ExpenseStatus::Pending, day(1)),
        expense(dec!(30), "USD", dec!(30), "Fuel", ExpenseStatus::Pending, day(2)),
    ];

    let stats = AggregationEngine::summarize(&expenses);
    assert_eq!(stats.by_category.len(), 2);
    assert_eq!(stats.by_category[0].category, "Fuel");
    assert_eq!(stats.by_category[0].count, 2);
    assert_eq!(stats.by_category[0].usd_total, dec!(50));
    assert_eq!(stats.by_category[1].category, "Rent");
}

#[test]
fn test_status_currency_cells() {
    let expenses = vec![
        expense(dec!(10), "EUR", dec!(11), "Fuel", ExpenseStatus::Pending, day(1)),
        expense(dec!(10), "EUR", dec!(11), "Fuel", ExpenseStatus::Approved, day(1)),
        expense(dec!(10), "EUR", dec!(11), "Fuel", ExpenseStatus::Pending, day(2)),
    ];

    let stats = AggregationEngine::summarize(&expenses);
    let pending_eur = stats
        .by_status_currency
        .iter()
        .find(|c| c.status == ExpenseStatus::Pending && c.currency_code == "EUR")
        .unwrap();
    assert_eq!(pending_eur.count, 2);
    assert_eq!(pending_eur.original_total, dec!(20));
    assert_eq!(pending_eur.usd_total, dec!(22));
}

#[test]
fn test_summarize_empty() {
    let stats = AggregationEngine::summarize(&[]);
    assert_eq!(stats.counts.total, 0);
    assert_eq!(stats.totals.total_usd, Decimal::ZERO);
    assert!(stats.by_category.is_empty());
    assert!(stats.by_currency.is_empty());
}

#[test]
fn test_daily_trend_zero_filled() {
    let expenses = vec![
        expense(dec!(10), "USD", dec!(10), "Fuel", ExpenseStatus::Pending, day(10)),
        expense(dec!(5), "USD", dec!(5), "Fuel", ExpenseStatus::Pending, day(10)),
        expense(dec!(7), "USD", dec!(7), "Fuel", ExpenseStatus::Pending, day(12)),
        // Outside the window
        expense(dec!(99), "USD", dec!(99), "Fuel", ExpenseStatus::Pending, day(1)),
    ];

    let trend = AggregationEngine::daily_trend(&expenses, 7, day(14));

    assert_eq!(trend.len(), 7);
    assert_eq!(trend[0].date, day(8));
    assert_eq!(trend[6].date, day(14));
    assert_eq!(trend[0].usd_total, Decimal::ZERO);
    assert_eq!(trend[2].usd_total, dec!(15)); // June 10
    assert_eq!(trend[4].usd_total, dec!(7)); // June 12
    assert_eq!(trend[2].label, "06-10");
}

#[test]
fn test_daily_trend_zero_days() {
    assert!(AggregationEngine::daily_trend(&[], 0, day(1)).is_empty());
}

#[test]
fn test_recent_trend_covers_last_week() {
    let trend = AggregationEngine::recent_trend(&[]);
    assert_eq!(trend.len(), usize::try_from(DEFAULT_TREND_DAYS).unwrap());
    assert_eq!(trend[trend.len() - 1].date, Utc::now().date_naive());
}
