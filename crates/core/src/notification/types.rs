//! Notification payload types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ExpenseId, NotificationId, UserId};

/// Notification severity, rendered as a badge by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational (claim submitted, claim resubmitted)
    Info,
    /// Positive outcome (claim approved)
    Success,
    /// Needs attention
    Warning,
    /// Negative outcome (claim rejected)
    Error,
}

impl Severity {
    /// Get string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Parse from string
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single in-app notification addressed to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification ID
    pub id: NotificationId,
    /// User the notification is addressed to
    pub recipient: UserId,
    /// Short headline
    pub title: String,
    /// Full message body
    pub message: String,
    /// Severity badge
    pub severity: Severity,
    /// Expense the notification refers to, if any
    pub related_expense: Option<ExpenseId>,
    /// Whether the recipient has read it
    pub read: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Build an unread notification stamped with the current time.
    #[must_use]
    pub fn new(
        recipient: UserId,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        related_expense: Option<ExpenseId>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            recipient,
            title: title.into(),
            message: message.into(),
            severity,
            related_expense,
            read: false,
            created_at: Utc::now(),
        }
    }
}
