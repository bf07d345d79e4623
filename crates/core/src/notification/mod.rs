//! In-app notification types and delivery seam.
//!
//! The ledger emits a notification on every lifecycle event (created,
//! resubmitted, approved, rejected). Delivery is abstracted behind
//! [`NotificationSink`] so the core stays free of transport concerns;
//! [`MemorySink`] is the in-memory implementation used in tests.

pub mod sink;
pub mod types;

pub use sink::{MemorySink, NotificationSink};
pub use types::{Notification, Severity};
