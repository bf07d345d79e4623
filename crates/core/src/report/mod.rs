//! Excel report generation.
//!
//! Two report shapes: a detailed export with one row per claim
//! (optionally split into one sheet per category, with embedded receipt
//! images) and a fixed-layout monthly summary keyed to the standard
//! category plan. Both produce in-memory xlsx workbooks; no filesystem
//! access beyond the [`ReceiptStore`](crate::storage::ReceiptStore)
//! seam.

pub mod composer;
pub mod error;
pub mod scaler;
pub mod summary;
pub mod types;

#[cfg(test)]
mod scaler_props;

pub use composer::ReportComposer;
pub use error::ReportError;
pub use scaler::{CellBox, Placement};
pub use summary::{SummaryPlan, SummaryRow};
pub use types::{ExportOptions, ImageQuality, Report, SheetTotals};
