//! Expense claim types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{AttachmentId, ExpenseId, UserId};
use crate::workflow::ExpenseStatus;

/// File extensions accepted for receipt attachments.
pub const ALLOWED_ATTACHMENT_TYPES: &[&str] = &[
    "txt", "pdf", "png", "jpg", "jpeg", "gif", "doc", "docx", "xls", "xlsx",
];

/// Extensions that can be embedded as pictures in exported reports.
const IMAGE_TYPES: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Metadata for one receipt file attached to a claim.
///
/// The ledger never holds file bytes; those live behind
/// [`ReceiptStore`](crate::storage::ReceiptStore) keyed by `stored_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentMeta {
    /// Unique attachment ID
    pub id: AttachmentId,
    /// Collision-free name the file is stored under
    pub stored_name: String,
    /// Name the file had when uploaded, for display
    pub original_name: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Lowercased file extension ("pdf", "jpg", ...)
    pub type_tag: String,
}

impl AttachmentMeta {
    /// Whether the attachment can be embedded as a picture.
    #[must_use]
    pub fn is_image(&self) -> bool {
        IMAGE_TYPES.contains(&self.type_tag.as_str())
    }

    /// Whether the extension is on the accept list.
    #[must_use]
    pub fn is_allowed_type(type_tag: &str) -> bool {
        ALLOWED_ATTACHMENT_TYPES.contains(&type_tag)
    }
}

/// A single expense claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique claim ID
    pub id: ExpenseId,
    /// Short title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Amount in the original currency
    pub amount: Decimal,
    /// ISO 4217 code of the original currency
    pub currency_code: String,
    /// Units of the original currency per 1 USD at submission time
    pub exchange_rate: Decimal,
    /// Amount normalized to USD at submission time
    pub usd_amount: Decimal,
    /// Expense category name
    pub category: String,
    /// Date the expense was incurred
    pub expense_date: NaiveDate,
    /// Workflow status
    pub status: ExpenseStatus,
    /// Reviewer comment, set on approve/reject
    pub approval_comment: Option<String>,
    /// Reviewer, set on approve/reject
    pub approved_by: Option<UserId>,
    /// Decision timestamp, set on approve/reject
    pub approved_at: Option<DateTime<Utc>>,
    /// Submitting user
    pub owner: UserId,
    /// Submission (or resubmission) timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
    /// Receipt attachments
    pub attachments: Vec<AttachmentMeta>,
}

/// Input for creating or resubmitting a claim.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    /// Short title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Amount in the original currency
    pub amount: Decimal,
    /// ISO 4217 code of the original currency
    pub currency_code: String,
    /// Units of the original currency per 1 USD
    pub exchange_rate: Decimal,
    /// Expense category name
    pub category: String,
    /// Date the expense was incurred
    pub expense_date: NaiveDate,
    /// Receipt attachments (at least one required)
    pub attachments: Vec<AttachmentMeta>,
}

/// Query filter for listing claims. All fields are conjunctive.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Match on workflow status
    pub status: Option<ExpenseStatus>,
    /// Match on original currency code
    pub currency_code: Option<String>,
    /// Match on category name
    pub category: Option<String>,
    /// Expense date lower bound (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Expense date upper bound (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Cap on the number of results
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    /// Whether the given expense passes every set predicate.
    #[must_use]
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(status) = self.status {
            if expense.status != status {
                return false;
            }
        }
        if let Some(ref code) = self.currency_code {
            if &expense.currency_code != code {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if &expense.category != category {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.expense_date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.expense_date > end {
                return false;
            }
        }
        true
    }
}
