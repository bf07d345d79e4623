//! Expense ledger: claim storage and lifecycle.
//!
//! The ledger owns every expense claim and drives it through the
//! approval state machine. Writes run validate-first, commit-last
//! under a single write lock so a failed validation never leaves a
//! half-applied claim behind. Notifications ride on each lifecycle
//! event via the [`NotificationSink`](crate::notification::NotificationSink)
//! seam.

pub mod error;
pub mod service;
pub mod types;
pub mod validation;


pub use error::LedgerError;
pub use service::ExpenseLedger;
pub use types::{AttachmentMeta, Expense, ExpenseDraft, ExpenseFilter};
