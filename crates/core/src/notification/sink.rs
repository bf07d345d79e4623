//! Notification delivery seam.

use std::sync::{Mutex, PoisonError};

use crate::ids::ExpenseId;
use crate::notification::types::Notification;

/// Delivery endpoint for notifications.
///
/// Implementations decide where notifications go (database row, push
/// channel, test buffer). `retract` removes every notification tied to
/// an expense; the ledger calls it when a claim is deleted so stale
/// references never outlive the claim.
pub trait NotificationSink: Send + Sync {
    /// Deliver a single notification.
    fn deliver(&self, notification: Notification);

    /// Remove all notifications referencing the given expense.
    fn retract(&self, expense_id: ExpenseId);
}

/// In-memory sink backed by a `Mutex<Vec<_>>`. Used in tests and
/// single-process deployments.
#[derive(Debug, Default)]
pub struct MemorySink {
    inner: Mutex<Vec<Notification>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all delivered notifications, oldest first.
    #[must_use]
    pub fn delivered(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain and return all delivered notifications.
    pub fn drain(&self) -> Vec<Notification> {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }
}

impl NotificationSink for MemorySink {
    fn deliver(&self, notification: Notification) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }

    fn retract(&self, expense_id: ExpenseId) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|n| n.related_expense != Some(expense_id));
    }
}
