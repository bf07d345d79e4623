//! Detailed expense report workbook.

// Image placement and row sizing work in pixels.
#![allow(clippy::float_arithmetic)]

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Image, Workbook, Worksheet};
use tracing::{debug, info};

use super::error::ReportError;
use super::scaler::{self, ATTACHMENT_CELL};
use super::types::{export_file_name, ExportOptions, Report, SheetTotals};
use crate::ids::UserId;
use crate::ledger::Expense;
use crate::storage::ReceiptStore;

/// Most embedded images per claim row.
const MAX_IMAGES_PER_ROW: usize = 3;

/// Excel caps sheet names at 31 characters.
const MAX_SHEET_NAME: usize = 31;

/// Header fill, dark blue.
const HEADER_COLOR: Color = Color::RGB(0x36_60_92);
/// Title band fill, darker blue.
const TITLE_COLOR: Color = Color::RGB(0x2E_59_84);
/// Alternating row fill.
const ALT_ROW_COLOR: Color = Color::RGB(0xF2_F2_F2);

/// Cell formats shared across sheets.
struct Palette {
    title: Format,
    header: Format,
    cell: Format,
    cell_alt: Format,
    center: Format,
    center_alt: Format,
    date: Format,
    amount: Format,
    usd: Format,
    attachment: Format,
    summary_label: Format,
    summary_amount: Format,
    summary_usd: Format,
}

impl Palette {
    fn new() -> Self {
        let bordered = Format::new().set_border(FormatBorder::Thin);
        Self {
            title: Format::new()
                .set_bold()
                .set_font_size(16)
                .set_background_color(TITLE_COLOR)
                .set_font_color(Color::White)
                .set_border(FormatBorder::Medium)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            header: Format::new()
                .set_bold()
                .set_font_size(12)
                .set_background_color(HEADER_COLOR)
                .set_font_color(Color::White)
                .set_border(FormatBorder::Medium)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            cell: bordered.clone().set_text_wrap(),
            cell_alt: bordered
                .clone()
                .set_text_wrap()
                .set_background_color(ALT_ROW_COLOR),
            center: bordered.clone().set_align(FormatAlign::Center),
            center_alt: bordered
                .clone()
                .set_align(FormatAlign::Center)
                .set_background_color(ALT_ROW_COLOR),
            date: bordered.clone().set_align(FormatAlign::Center),
            amount: bordered.clone().set_num_format("#,##0.00"),
            usd: bordered.clone().set_num_format("$#,##0.00"),
            attachment: bordered
                .set_text_wrap()
                .set_align(FormatAlign::VerticalCenter),
            summary_label: Format::new()
                .set_bold()
                .set_font_size(11)
                .set_background_color(Color::RGB(0xFF_E0_B2))
                .set_font_color(Color::RGB(0xE6_51_00))
                .set_border(FormatBorder::Medium)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            summary_amount: Format::new()
                .set_bold()
                .set_font_size(11)
                .set_background_color(Color::RGB(0xFF_F3_E0))
                .set_border(FormatBorder::Medium)
                .set_align(FormatAlign::Right)
                .set_num_format("#,##0.00"),
            summary_usd: Format::new()
                .set_bold()
                .set_font_size(11)
                .set_background_color(Color::RGB(0xE1_F5_FE))
                .set_border(FormatBorder::Medium)
                .set_align(FormatAlign::Right)
                .set_num_format("$#,##0.00"),
        }
    }
}

/// Decimal into a number cell. Out-of-range values land as 0.
fn to_cell_number(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Replace characters Excel forbids in sheet names and cap the length.
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '?' | '*' | '[' | ']' | ':' => '_',
            other => other,
        })
        .collect();
    cleaned.chars().take(MAX_SHEET_NAME).collect()
}

/// Builds detailed expense report workbooks.
pub struct ReportComposer;

impl ReportComposer {
    /// Compose the detailed export.
    ///
    /// Claims are filtered by the option's date range and status, then
    /// sorted by expense date, category and ID so output is stable.
    /// With `group_by_category` each category gets its own sheet;
    /// otherwise everything lands on one "All Expenses" sheet.
    /// `resolve_user` maps claim owners to display names.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` when the range is
    /// inverted, or `ReportError::Workbook` if workbook assembly fails.
    pub fn compose<F>(
        expenses: &[Expense],
        options: &ExportOptions,
        store: &dyn ReceiptStore,
        resolve_user: F,
    ) -> Result<Report, ReportError>
    where
        F: Fn(UserId) -> String,
    {
        if let (Some(start), Some(end)) = (options.start_date, options.end_date) {
            if start > end {
                return Err(ReportError::InvalidDateRange);
            }
        }

        let mut selected: Vec<&Expense> = expenses
            .iter()
            .filter(|e| options.start_date.is_none_or(|d| e.expense_date >= d))
            .filter(|e| options.end_date.is_none_or(|d| e.expense_date <= d))
            .filter(|e| options.status.is_none_or(|s| e.status == s))
            .collect();
        selected.sort_by(|a, b| {
            (a.expense_date, &a.category, a.id).cmp(&(b.expense_date, &b.category, b.id))
        });

        let mut workbook = Workbook::new();
        let palette = Palette::new();
        let mut sheets = Vec::new();

        if options.group_by_category {
            let mut groups: BTreeMap<&str, Vec<&Expense>> = BTreeMap::new();
            for &expense in &selected {
                groups.entry(expense.category.as_str()).or_default().push(expense);
            }
            for (category, group) in groups {
                let worksheet = workbook.add_worksheet();
                let totals = Self::write_sheet(
                    worksheet,
                    category,
                    &group,
                    options,
                    store,
                    &resolve_user,
                    &palette,
                )?;
                sheets.push(totals);
            }
        } else {
            let worksheet = workbook.add_worksheet();
            let totals = Self::write_sheet(
                worksheet,
                "All Expenses",
                &selected,
                options,
                store,
                &resolve_user,
                &palette,
            )?;
            sheets.push(totals);
        }

        let bytes = workbook.save_to_buffer()?;
        let file_name = export_file_name("detailed_report", options.start_date, options.end_date);
        info!(file = %file_name, sheets = sheets.len(), "detailed report composed");
        Ok(Report {
            file_name,
            bytes,
            sheets,
        })
    }

    #[allow(clippy::too_many_lines)]
    fn write_sheet<F>(
        worksheet: &mut Worksheet,
        sheet_name: &str,
        expenses: &[&Expense],
        options: &ExportOptions,
        store: &dyn ReceiptStore,
        resolve_user: &F,
        palette: &Palette,
    ) -> Result<SheetTotals, ReportError>
    where
        F: Fn(UserId) -> String,
    {
        let name = sanitize_sheet_name(sheet_name);
        worksheet.set_name(&name)?;

        worksheet.set_column_width(0, 12)?; // Date
        worksheet.set_column_width(1, 15)?; // Category
        worksheet.set_column_width(2, 25)?; // Title
        worksheet.set_column_width(3, 10)?; // Currency
        worksheet.set_column_width(4, 15)?; // Amount
        worksheet.set_column_width(5, 15)?; // Amount (USD)
        worksheet.set_column_width(6, 25)?; // Description

        let mut headers = vec![
            "Date",
            "Category",
            "Title",
            "Currency",
            "Amount",
            "Amount (USD)",
            "Description",
        ];
        let mut next_col = 7u16;
        if options.include_comments {
            worksheet.set_column_width(next_col, 18)?;
            headers.push("Review Comment");
            next_col += 1;
        }
        worksheet.set_column_width(next_col, 12)?;
        headers.push("Submitted By");
        next_col += 1;
        if options.include_images {
            worksheet.set_column_width(next_col, 30)?;
            headers.push("Attachments");
        }

        let last_col = u16::try_from(headers.len() - 1).unwrap_or(0);
        worksheet.merge_range(
            0,
            0,
            0,
            last_col,
            &format!("{sheet_name} - Expense Details"),
            &palette.title,
        )?;
        worksheet.set_row_height(0, 25)?;

        for (col, header) in headers.iter().enumerate() {
            let col = u16::try_from(col).unwrap_or(0);
            worksheet.write_string_with_format(1, col, *header, &palette.header)?;
        }
        worksheet.set_row_height(1, 18)?;

        let mut row = 2u32;
        for (idx, expense) in expenses.iter().enumerate() {
            let alternate = idx % 2 == 1;
            let cell = if alternate { &palette.cell_alt } else { &palette.cell };
            let center = if alternate { &palette.center_alt } else { &palette.center };

            worksheet.write_string_with_format(
                row,
                0,
                expense.expense_date.format("%Y-%m-%d").to_string(),
                &palette.date,
            )?;
            worksheet.write_string_with_format(row, 1, &expense.category, center)?;
            worksheet.write_string_with_format(row, 2, &expense.title, cell)?;
            worksheet.write_string_with_format(row, 3, &expense.currency_code, center)?;
            worksheet.write_number_with_format(
                row,
                4,
                to_cell_number(expense.amount),
                &palette.amount,
            )?;
            worksheet.write_number_with_format(
                row,
                5,
                to_cell_number(expense.usd_amount),
                &palette.usd,
            )?;
            worksheet.write_string_with_format(row, 6, &expense.description, cell)?;

            let mut col = 7u16;
            if options.include_comments {
                worksheet.write_string_with_format(
                    row,
                    col,
                    expense.approval_comment.as_deref().unwrap_or(""),
                    cell,
                )?;
                col += 1;
            }
            worksheet.write_string_with_format(row, col, resolve_user(expense.owner), center)?;
            col += 1;

            let mut row_height = 20.0f64;
            if options.include_images && !expense.attachments.is_empty() {
                let mut lines = Vec::new();
                let mut images_added = 0usize;

                for attachment in &expense.attachments {
                    if attachment.is_image() && images_added < MAX_IMAGES_PER_ROW {
                        match store
                            .fetch(&attachment.stored_name)
                            .ok()
                            .and_then(|bytes| Image::new_from_buffer(&bytes).ok())
                        {
                            Some(image) => {
                                let natural_width = image.width();
                                let natural_height = image.height();
                                let placement = scaler::place(
                                    natural_width,
                                    natural_height,
                                    options.image_quality,
                                    ATTACHMENT_CELL,
                                );
                                let image = image
                                    .set_scale_width(placement.width / natural_width)
                                    .set_scale_height(placement.height / natural_height);
                                worksheet.insert_image_with_offset(
                                    row,
                                    col,
                                    &image,
                                    placement.x_offset,
                                    placement.y_offset,
                                )?;
                                images_added += 1;
                                row_height = row_height.max(placement.height + 12.0);
                                lines.push(format!("Image: {}", attachment.original_name));
                            }
                            // Missing or undecodable file degrades to text
                            None => {
                                debug!(file = %attachment.stored_name, "receipt image unavailable");
                                lines.push(format!(
                                    "Image unavailable: {}",
                                    attachment.original_name
                                ));
                            }
                        }
                    } else if attachment.is_image() {
                        lines.push(format!("Image: {}", attachment.original_name));
                    } else {
                        lines.push(format!("File: {}", attachment.original_name));
                    }
                }
                worksheet.write_string_with_format(
                    row,
                    col,
                    lines.join("\n"),
                    &palette.attachment,
                )?;
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            worksheet.set_row_height_pixels(row, row_height.max(25.0) as u16)?;
            row += 1;
        }

        let original_total: Decimal = expenses.iter().map(|e| e.amount).sum();
        let usd_total: Decimal = expenses.iter().map(|e| e.usd_amount).sum();

        if !expenses.is_empty() {
            row += 2;
            worksheet.write_string_with_format(row, 3, "Original Total:", &palette.summary_label)?;
            worksheet.write_number_with_format(
                row,
                4,
                to_cell_number(original_total),
                &palette.summary_amount,
            )?;
            worksheet.write_string_with_format(row, 5, "USD Total:", &palette.summary_label)?;
            worksheet.write_number_with_format(
                row,
                6,
                to_cell_number(usd_total),
                &palette.summary_usd,
            )?;
            worksheet.set_row_height(row, 22)?;
            row += 1;
            worksheet.merge_range(
                row,
                3,
                row,
                6,
                &format!("Total records: {}", expenses.len()),
                &palette.summary_label,
            )?;
            worksheet.set_row_height(row, 22)?;
        }

        Ok(SheetTotals {
            name,
            records: expenses.len(),
            original_total,
            usd_total,
        })
    }
}
