//! Monthly summary workbook.
//!
//! Fixed-layout sheet keyed to a plan of category rows: each plan row
//! carries a ledger ordinal and a standard spend ratio, and claims are
//! folded into USD and CNY totals with a remarks column tracing every
//! claim's original amount and rate. Categories without claims in the
//! period still get their row, marked "n/a".

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use tracing::info;

use super::error::ReportError;
use super::types::Report;
use crate::ledger::Expense;

/// Fixed CNY-per-USD rate used for the CNY column.
pub const CNY_PER_USD: Decimal = dec!(7.12);

/// One category row of the summary plan.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    /// Ledger ordinal; several categories can share one
    pub ordinal: u32,
    /// Category name, matched against claim categories verbatim
    pub category: &'static str,
    /// Standard spend ratio for the category
    pub standard_ratio: Decimal,
}

/// The row plan for the monthly summary sheet.
#[derive(Debug, Clone)]
pub struct SummaryPlan {
    /// Rows in sheet order
    pub rows: Vec<SummaryRow>,
}

impl Default for SummaryPlan {
    /// Company-standard plan. Ordinals and ratios are ledger
    /// conventions and are not required to be unique or contiguous.
    fn default() -> Self {
        let row = |ordinal, category, standard_ratio| SummaryRow {
            ordinal,
            category,
            standard_ratio,
        };
        Self {
            rows: vec![
                row(1, "Transportation", dec!(0.01)),
                row(1, "Tolls & Parking", dec!(0.01)),
                row(2, "Repairs", dec!(0.01)),
                row(3, "Office Supplies", dec!(0.01)),
                row(4, "Fuel", dec!(0.01)),
                row(5, "Living Allowance", dec!(0.01)),
                row(5, "Utilities", dec!(0.01)),
                row(6, "Lodging", dec!(0.01)),
                row(7, "Staff Welfare", dec!(0.01)),
                row(8, "Business Entertainment", dec!(0.01)),
                row(10, "Advertising", dec!(0.01)),
                row(9, "Freight", dec!(0.05)),
                row(13, "Bank Charges", dec!(0.01)),
                row(10, "Non-operating Expense", dec!(0.01)),
                row(11, "Wages", dec!(0.05)),
                row(12, "Rent", dec!(0.01)),
                row(13, "Other Receivables", dec!(0.00)),
            ],
        }
    }
}

struct CategoryFold {
    usd_total: Decimal,
    cny_total: Decimal,
    remarks: Vec<String>,
}

/// Build the remark for one claim: description plus original amount
/// and rate, so the source of every summary figure stays traceable.
fn remark_for(expense: &Expense) -> String {
    let rate = if expense.currency_code == "USD" {
        Decimal::ONE
    } else {
        expense.exchange_rate
    };
    // Precision specifiers pad whole amounts out to two places
    let amount = format!("{:.2}", expense.amount);
    let rate = format!("{rate:.0}");
    let description = expense.description.trim();
    if description.is_empty() {
        format!("{amount}/rate {rate}")
    } else {
        format!("{description} amount {amount}/rate {rate}")
    }
}

/// Fold claims within the period into per-category totals and remarks.
///
/// Claims dated outside the (inclusive) period are skipped, so callers
/// may pass an unfiltered ledger snapshot.
fn fold_categories<'a>(
    expenses: &'a [Expense],
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> (Decimal, HashMap<&'a str, CategoryFold>) {
    let mut grand_usd = Decimal::ZERO;
    let mut folds: HashMap<&str, CategoryFold> = HashMap::new();
    for expense in expenses.iter().filter(|e| {
        start_date.is_none_or(|start| e.expense_date >= start)
            && end_date.is_none_or(|end| e.expense_date <= end)
    }) {
        grand_usd += expense.usd_amount;
        let fold = folds
            .entry(expense.category.as_str())
            .or_insert_with(|| CategoryFold {
                usd_total: Decimal::ZERO,
                cny_total: Decimal::ZERO,
                remarks: Vec::new(),
            });
        fold.usd_total += expense.usd_amount;
        fold.cny_total += expense.usd_amount * CNY_PER_USD;
        fold.remarks.push(remark_for(expense));
    }
    (grand_usd, folds)
}

/// Compose the monthly summary workbook.
///
/// One row per plan entry, in plan order. Claims outside the period
/// are ignored. Actual ratio is each category's USD share of the
/// grand total, zero when the period has no spend at all.
///
/// # Errors
///
/// Returns `ReportError::Workbook` if workbook assembly fails.
pub fn compose_monthly_summary(
    expenses: &[Expense],
    plan: &SummaryPlan,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<Report, ReportError> {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start > end {
            return Err(ReportError::InvalidDateRange);
        }
    }

    let (grand_usd, folds) = fold_categories(expenses, start_date, end_date);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Monthly Summary")?;

    let header = Format::new()
        .set_bold()
        .set_font_size(12)
        .set_background_color(Color::RGB(0x36_60_92))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Medium)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let cell = Format::new()
        .set_border(FormatBorder::Thin)
        .set_font_size(10)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let amount = Format::new()
        .set_border(FormatBorder::Thin)
        .set_font_size(10)
        .set_align(FormatAlign::Right)
        .set_num_format("#,##0.00");
    let percentage = Format::new()
        .set_border(FormatBorder::Thin)
        .set_font_size(10)
        .set_align(FormatAlign::Center)
        .set_num_format("0.00%");
    let remarks_cell = Format::new()
        .set_border(FormatBorder::Thin)
        .set_font_size(10)
        .set_text_wrap();

    worksheet.set_column_width(0, 8)?; // No.
    worksheet.set_column_width(1, 15)?; // Category
    worksheet.set_column_width(2, 15)?; // Amount (USD)
    worksheet.set_column_width(3, 15)?; // Amount (CNY)
    worksheet.set_column_width(4, 12)?; // Standard ratio
    worksheet.set_column_width(5, 12)?; // Actual ratio
    worksheet.set_column_width(6, 50)?; // Remarks

    let headers = [
        "No.",
        "Category",
        "Amount (USD)",
        "Amount (CNY)",
        "Standard Ratio",
        "Actual Ratio",
        "Remarks",
    ];
    for (col, text) in headers.iter().enumerate() {
        let col = u16::try_from(col).unwrap_or(0);
        worksheet.write_string_with_format(0, col, *text, &header)?;
    }

    for (idx, plan_row) in plan.rows.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let row = idx as u32 + 1;
        worksheet.write_number_with_format(row, 0, f64::from(plan_row.ordinal), &cell)?;
        worksheet.write_string_with_format(row, 1, plan_row.category, &cell)?;
        worksheet.write_number_with_format(
            row,
            4,
            plan_row.standard_ratio.to_f64().unwrap_or_default(),
            &percentage,
        )?;

        if let Some(fold) = folds.get(plan_row.category) {
            let actual_ratio = if grand_usd > Decimal::ZERO {
                fold.usd_total / grand_usd
            } else {
                Decimal::ZERO
            };
            worksheet.write_number_with_format(
                row,
                2,
                fold.usd_total.to_f64().unwrap_or_default(),
                &amount,
            )?;
            worksheet.write_number_with_format(
                row,
                3,
                fold.cny_total.to_f64().unwrap_or_default(),
                &amount,
            )?;
            worksheet.write_number_with_format(
                row,
                5,
                actual_ratio.to_f64().unwrap_or_default(),
                &percentage,
            )?;
            worksheet.write_string_with_format(row, 6, fold.remarks.join(", "), &remarks_cell)?;
        } else {
            worksheet.write_string_with_format(row, 2, "n/a", &cell)?;
            worksheet.write_string_with_format(row, 3, "n/a", &cell)?;
            worksheet.write_string_with_format(row, 5, "n/a", &cell)?;
            worksheet.write_string_with_format(row, 6, "n/a", &remarks_cell)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    let file_name = super::types::export_file_name("monthly_summary", start_date, end_date);
    info!(file = %file_name, rows = plan.rows.len(), "monthly summary composed");
    Ok(Report {
        file_name,
        bytes,
        sheets: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ExpenseId, UserId};
    use crate::workflow::ExpenseStatus;
    use chrono::Utc;

    fn expense(category: &str, amount: Decimal, currency: &str, rate: Decimal, usd: Decimal) -> Expense {
        let now = Utc::now();
        Expense {
            id: ExpenseId::new(),
            title: "t".to_string(),
            description: "Diesel for truck".to_string(),
            amount,
            currency_code: currency.to_string(),
            exchange_rate: rate,
            usd_amount: usd,
            category: category.to_string(),
            expense_date: NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
            status: ExpenseStatus::Approved,
            approval_comment: None,
            approved_by: None,
            approved_at: None,
            owner: UserId::new(),
            created_at: now,
            updated_at: now,
            attachments: vec![],
        }
    }

    #[test]
    fn test_default_plan_shape() {
        let plan = SummaryPlan::default();
        assert_eq!(plan.rows.len(), 17);
        let freight = plan.rows.iter().find(|r| r.category == "Freight").unwrap();
        assert_eq!(freight.standard_ratio, dec!(0.05));
        assert_eq!(freight.ordinal, 9);
        let other = plan
            .rows
            .iter()
            .find(|r| r.category == "Other Receivables")
            .unwrap();
        assert_eq!(other.standard_ratio, dec!(0.00));
    }

    #[test]
    fn test_remark_formats() {
        let e = expense("Fuel", dec!(712.00), "CNY", dec!(7.12), dec!(100.00));
        assert_eq!(remark_for(&e), "Diesel for truck amount 712.00/rate 7");

        let mut usd = expense("Fuel", dec!(50), "USD", dec!(1), dec!(50));
        usd.description = String::new();
        assert_eq!(remark_for(&usd), "50.00/rate 1");
    }

    #[test]
    fn test_summary_window_excludes_out_of_range_claims() {
        let mut march = expense("Fuel", dec!(10), "USD", dec!(1), dec!(10));
        march.expense_date = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
        let mut boundary = expense("Lodging", dec!(25), "USD", dec!(1), dec!(25));
        boundary.expense_date = NaiveDate::from_ymd_opt(2026, 4, 30).unwrap();
        let april = expense("Freight", dec!(40), "USD", dec!(1), dec!(40));

        let expenses = [march, boundary, april];
        let (grand_usd, folds) = fold_categories(
            &expenses,
            NaiveDate::from_ymd_opt(2026, 4, 1),
            NaiveDate::from_ymd_opt(2026, 4, 30),
        );

        assert_eq!(grand_usd, dec!(65));
        assert!(folds.contains_key("Freight"));
        assert!(folds.contains_key("Lodging"));
        assert!(!folds.contains_key("Fuel"));
    }

    #[test]
    fn test_compose_summary_smoke() {
        let expenses = vec![
            expense("Fuel", dec!(712.00), "CNY", dec!(7.12), dec!(100.00)),
            expense("Freight", dec!(50), "USD", dec!(1), dec!(50)),
        ];
        let report = compose_monthly_summary(
            &expenses,
            &SummaryPlan::default(),
            NaiveDate::from_ymd_opt(2026, 4, 1),
            NaiveDate::from_ymd_opt(2026, 4, 30),
        )
        .unwrap();
        assert_eq!(report.file_name, "monthly_summary_20260401-20260430.xlsx");
        assert!(!report.bytes.is_empty());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = compose_monthly_summary(
            &[],
            &SummaryPlan::default(),
            NaiveDate::from_ymd_opt(2026, 5, 1),
            NaiveDate::from_ymd_opt(2026, 4, 1),
        );
        assert!(matches!(result, Err(ReportError::InvalidDateRange)));
    }
}
