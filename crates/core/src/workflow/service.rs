//! State transition logic for the approval workflow.

use chrono::Utc;

use crate::actor::Actor;
use crate::workflow::error::WorkflowError;
use crate::workflow::types::{ApprovalAction, ExpenseStatus};

/// Stateless service for validating expense workflow transitions.
///
/// All methods are associated functions that validate a transition and
/// return the [`ApprovalAction`] to apply, including audit data. Applying
/// the action atomically against persisted state is the ledger's job.
pub struct WorkflowService;

impl WorkflowService {
    /// Approve a pending claim.
    ///
    /// # Errors
    ///
    /// * `WorkflowError::AdminRequired` if the actor is not an admin
    /// * `WorkflowError::InvalidTransition` if the claim is not pending
    pub fn approve(
        current_status: ExpenseStatus,
        actor: &Actor,
        comment: Option<String>,
    ) -> Result<ApprovalAction, WorkflowError> {
        if !actor.is_admin() {
            return Err(WorkflowError::AdminRequired { action: "approve" });
        }
        match current_status {
            ExpenseStatus::Pending => Ok(ApprovalAction {
                new_status: ExpenseStatus::Approved,
                decided_by: actor.user_id,
                decided_at: Utc::now(),
                comment,
            }),
            _ => Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: ExpenseStatus::Approved,
            }),
        }
    }

    /// Reject a pending claim.
    ///
    /// # Errors
    ///
    /// * `WorkflowError::AdminRequired` if the actor is not an admin
    /// * `WorkflowError::InvalidTransition` if the claim is not pending
    pub fn reject(
        current_status: ExpenseStatus,
        actor: &Actor,
        comment: Option<String>,
    ) -> Result<ApprovalAction, WorkflowError> {
        if !actor.is_admin() {
            return Err(WorkflowError::AdminRequired { action: "reject" });
        }
        match current_status {
            ExpenseStatus::Pending => Ok(ApprovalAction {
                new_status: ExpenseStatus::Rejected,
                decided_by: actor.user_id,
                decided_at: Utc::now(),
                comment,
            }),
            _ => Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: ExpenseStatus::Rejected,
            }),
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Pending → Approved (approve)
    /// - Pending → Rejected (reject)
    /// - Pending | Rejected → Pending (edit / resubmission)
    #[must_use]
    pub fn is_valid_transition(from: ExpenseStatus, to: ExpenseStatus) -> bool {
        matches!(
            (from, to),
            (
                ExpenseStatus::Pending,
                ExpenseStatus::Approved | ExpenseStatus::Rejected | ExpenseStatus::Pending
            ) | (ExpenseStatus::Rejected, ExpenseStatus::Pending)
        )
    }
}
