//! Workflow domain types for the expense claim lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::UserId;

/// Expense claim status in the approval workflow.
///
/// Claims progress through these states from submission onwards.
/// The valid transitions are:
/// - Pending → Approved (approve)
/// - Pending → Rejected (reject)
/// - Pending | Rejected → Pending (edit / resubmission)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    /// Claim is awaiting an approval decision.
    Pending,
    /// Claim has been approved by an administrator.
    Approved,
    /// Claim has been rejected by an administrator.
    Rejected,
}

impl ExpenseStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if the owner may edit (resubmit) the claim.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Pending | Self::Rejected)
    }

    /// Returns true if the owner may delete the claim.
    #[must_use]
    pub fn is_deletable(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true if an approval decision has been recorded.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a validated approve/reject transition, carrying the audit data
/// to be stamped onto the expense.
#[derive(Debug, Clone)]
pub struct ApprovalAction {
    /// The new status after the transition.
    pub new_status: ExpenseStatus,
    /// The administrator who made the decision.
    pub decided_by: UserId,
    /// When the decision was made.
    pub decided_at: DateTime<Utc>,
    /// Optional comment from the approver.
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(ExpenseStatus::Pending.as_str(), "pending");
        assert_eq!(ExpenseStatus::Approved.as_str(), "approved");
        assert_eq!(ExpenseStatus::Rejected.as_str(), "rejected");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ExpenseStatus::parse("pending"), Some(ExpenseStatus::Pending));
        assert_eq!(
            ExpenseStatus::parse("APPROVED"),
            Some(ExpenseStatus::Approved)
        );
        assert_eq!(
            ExpenseStatus::parse("Rejected"),
            Some(ExpenseStatus::Rejected)
        );
        assert_eq!(ExpenseStatus::parse("draft"), None);
    }

    #[test]
    fn test_status_predicates() {
        assert!(ExpenseStatus::Pending.is_editable());
        assert!(ExpenseStatus::Rejected.is_editable());
        assert!(!ExpenseStatus::Approved.is_editable());

        assert!(ExpenseStatus::Pending.is_deletable());
        assert!(!ExpenseStatus::Rejected.is_deletable());
        assert!(!ExpenseStatus::Approved.is_deletable());

        assert!(!ExpenseStatus::Pending.is_decided());
        assert!(ExpenseStatus::Approved.is_decided());
        assert!(ExpenseStatus::Rejected.is_decided());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", ExpenseStatus::Pending), "pending");
    }
}
