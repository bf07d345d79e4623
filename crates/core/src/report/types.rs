//! Report option and result types.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::workflow::ExpenseStatus;

/// Embedded image quality tier.
///
/// Each tier bounds the displayed image size; receipts are only ever
/// scaled down, never up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageQuality {
    /// 150 x 100 box
    Low,
    /// 200 x 150 box
    #[default]
    Medium,
    /// 300 x 200 box
    High,
}

impl ImageQuality {
    /// Target bounding box in pixels, (width, height).
    #[must_use]
    pub fn bounding_box(&self) -> (f64, f64) {
        match self {
            Self::Low => (150.0, 100.0),
            Self::Medium => (200.0, 150.0),
            Self::High => (300.0, 200.0),
        }
    }

    /// JPEG quality hint for upstream re-encoding of receipt uploads.
    #[must_use]
    pub fn jpeg_quality(&self) -> u8 {
        match self {
            Self::Low => 70,
            Self::Medium => 85,
            Self::High => 95,
        }
    }
}

/// Options for the detailed export.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Expense date lower bound (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Expense date upper bound (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Restrict to one workflow status
    pub status: Option<ExpenseStatus>,
    /// Embed receipt images in the attachment column
    pub include_images: bool,
    /// One sheet per category instead of a single flat sheet
    pub group_by_category: bool,
    /// Add the reviewer comment column
    pub include_comments: bool,
    /// Image quality tier
    pub image_quality: ImageQuality,
}

/// Per-sheet totals, returned alongside the workbook bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTotals {
    /// Sheet name as written to the workbook
    pub name: String,
    /// Number of claim rows on the sheet
    pub records: usize,
    /// Sum of original-currency amounts
    pub original_total: Decimal,
    /// Sum of USD amounts
    pub usd_total: Decimal,
}

/// A finished report.
#[derive(Debug, Clone)]
pub struct Report {
    /// Suggested download file name
    pub file_name: String,
    /// The xlsx workbook
    pub bytes: Vec<u8>,
    /// Totals per sheet, in sheet order
    pub sheets: Vec<SheetTotals>,
}

/// Build the export file name from the date range.
///
/// `prefix_YYYYMMDD-YYYYMMDD.xlsx` with both bounds, `prefix_from_...`
/// or `prefix_to_...` with one, `prefix_all.xlsx` with none.
#[must_use]
pub fn export_file_name(
    prefix: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> String {
    match (start_date, end_date) {
        (Some(start), Some(end)) => {
            format!("{prefix}_{}-{}.xlsx", start.format("%Y%m%d"), end.format("%Y%m%d"))
        }
        (Some(start), None) => format!("{prefix}_from_{}.xlsx", start.format("%Y%m%d")),
        (None, Some(end)) => format!("{prefix}_to_{}.xlsx", end.format("%Y%m%d")),
        (None, None) => format!("{prefix}_all.xlsx"),
    }
}
