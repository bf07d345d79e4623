//! Expense ledger service.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use tracing::{debug, info};

use super::error::LedgerError;
use super::types::{AttachmentMeta, Expense, ExpenseDraft, ExpenseFilter};
use super::validation::validate_draft;
use crate::actor::Actor;
use crate::currency::usd_normalize;
use crate::ids::ExpenseId;
use crate::notification::{Notification, NotificationSink, Severity};
use crate::workflow::{ExpenseStatus, WorkflowError, WorkflowService};

/// Thread-safe expense ledger.
///
/// Claims live in a `BTreeMap` behind a single `RwLock`; v7 IDs make
/// map order submission order. Every mutation validates first and
/// commits last, so an error never leaves a partially-applied claim.
pub struct ExpenseLedger<N: NotificationSink> {
    inner: RwLock<BTreeMap<ExpenseId, Expense>>,
    sink: Arc<N>,
}

impl<N: NotificationSink> ExpenseLedger<N> {
    /// Create an empty ledger delivering notifications to `sink`.
    pub fn new(sink: Arc<N>) -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
            sink,
        }
    }

    /// Submit a new claim.
    ///
    /// The USD amount is normalized from the draft's amount and rate at
    /// submission time and never silently recomputed afterwards. The
    /// claim starts in `Pending`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the draft fails validation.
    pub fn create(&self, actor: &Actor, draft: ExpenseDraft) -> Result<Expense, LedgerError> {
        validate_draft(&draft)?;

        let now = Utc::now();
        let usd_amount = usd_normalize(draft.amount, draft.exchange_rate, &draft.currency_code);
        let expense = Expense {
            id: ExpenseId::new(),
            title: draft.title,
            description: draft.description,
            amount: draft.amount,
            currency_code: draft.currency_code,
            exchange_rate: draft.exchange_rate,
            usd_amount,
            category: draft.category,
            expense_date: draft.expense_date,
            status: ExpenseStatus::Pending,
            approval_comment: None,
            approved_by: None,
            approved_at: None,
            owner: actor.user_id,
            created_at: now,
            updated_at: now,
            attachments: draft.attachments,
        };

        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(expense.id, expense.clone());
        drop(guard);

        info!(expense_id = %expense.id, currency = %expense.currency_code, "expense created");
        Ok(expense)
    }

    /// Edit a claim, which is always a resubmission.
    ///
    /// Only the owner may edit, and only while the claim is pending or
    /// rejected. Every draft field replaces the stored one, the
    /// attachment set is replaced wholesale, approval metadata is
    /// cleared, the status returns to `Pending` and the submission
    /// timestamp is refreshed.
    ///
    /// Returns the updated claim plus the attachments that were
    /// replaced, so the caller can remove their files from storage.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the claim is missing, the actor is not
    /// the owner, the claim is already approved, or the draft is
    /// invalid.
    pub fn edit(
        &self,
        actor: &Actor,
        id: ExpenseId,
        draft: ExpenseDraft,
    ) -> Result<(Expense, Vec<AttachmentMeta>), LedgerError> {
        validate_draft(&draft)?;

        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let expense = guard.get_mut(&id).ok_or(LedgerError::NotFound(id))?;

        if expense.owner != actor.user_id {
            return Err(LedgerError::PermissionDenied("only the owner can edit a claim"));
        }
        if !expense.status.is_editable() {
            return Err(LedgerError::Workflow(WorkflowError::InvalidTransition {
                from: expense.status,
                to: ExpenseStatus::Pending,
            }));
        }

        let now = Utc::now();
        let replaced = std::mem::replace(&mut expense.attachments, draft.attachments);
        expense.title = draft.title;
        expense.description = draft.description;
        expense.amount = draft.amount;
        expense.currency_code = draft.currency_code;
        expense.exchange_rate = draft.exchange_rate;
        expense.usd_amount = usd_normalize(
            expense.amount,
            expense.exchange_rate,
            &expense.currency_code,
        );
        expense.category = draft.category;
        expense.expense_date = draft.expense_date;
        expense.status = ExpenseStatus::Pending;
        expense.approval_comment = None;
        expense.approved_by = None;
        expense.approved_at = None;
        expense.created_at = now;
        expense.updated_at = now;

        let updated = expense.clone();
        drop(guard);

        info!(expense_id = %id, "expense resubmitted");
        self.sink.deliver(Notification::new(
            updated.owner,
            "Expense Resubmitted",
            format!("Your expense '{}' was updated and is pending review", updated.title),
            Severity::Info,
            Some(id),
        ));
        Ok((updated, replaced))
    }

    /// Delete a claim.
    ///
    /// Only the owner can delete, and only while the claim is pending.
    /// Every notification referencing the claim is retracted. Returns
    /// the removed claim so the caller can clean up its receipt files.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the claim is missing, the actor is not
    /// the owner, or the claim is not pending.
    pub fn delete(&self, actor: &Actor, id: ExpenseId) -> Result<Expense, LedgerError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let expense = guard.get(&id).ok_or(LedgerError::NotFound(id))?;

        if expense.owner != actor.user_id {
            return Err(LedgerError::PermissionDenied(
                "only the owner can delete a claim",
            ));
        }
        if !expense.status.is_deletable() {
            // Deleting leaves the status alone, so the rejected
            // transition is reported as status -> status.
            return Err(LedgerError::Workflow(WorkflowError::InvalidTransition {
                from: expense.status,
                to: expense.status,
            }));
        }

        // get() above proved presence; remove cannot miss under the same guard
        let removed = guard.remove(&id).ok_or(LedgerError::NotFound(id))?;
        drop(guard);

        info!(expense_id = %id, "expense deleted");
        self.sink.retract(id);
        Ok(removed)
    }

    /// Approve a pending claim. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the claim is missing, the actor is not
    /// an admin, or the claim is not pending.
    pub fn approve(
        &self,
        actor: &Actor,
        id: ExpenseId,
        comment: Option<String>,
    ) -> Result<Expense, LedgerError> {
        self.decide(actor, id, comment, true)
    }

    /// Reject a pending claim. Admin only.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the claim is missing, the actor is not
    /// an admin, or the claim is not pending.
    pub fn reject(
        &self,
        actor: &Actor,
        id: ExpenseId,
        comment: Option<String>,
    ) -> Result<Expense, LedgerError> {
        self.decide(actor, id, comment, false)
    }

    fn decide(
        &self,
        actor: &Actor,
        id: ExpenseId,
        comment: Option<String>,
        approve: bool,
    ) -> Result<Expense, LedgerError> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let expense = guard.get_mut(&id).ok_or(LedgerError::NotFound(id))?;

        // Check-and-set under the write guard: concurrent decisions on
        // the same claim serialize here and the loser gets
        // InvalidTransition.
        let action = if approve {
            WorkflowService::approve(expense.status, actor, comment)?
        } else {
            WorkflowService::reject(expense.status, actor, comment)?
        };

        expense.status = action.new_status;
        expense.approval_comment = action.comment;
        expense.approved_by = Some(action.decided_by);
        expense.approved_at = Some(action.decided_at);
        expense.updated_at = action.decided_at;

        let updated = expense.clone();
        drop(guard);

        info!(expense_id = %id, status = %updated.status, "expense decided");
        let (title, severity) = if approve {
            ("Expense Approved", Severity::Success)
        } else {
            ("Expense Rejected", Severity::Error)
        };
        let message = match &updated.approval_comment {
            Some(c) => format!("Your expense '{}' was {}: {}", updated.title, updated.status, c),
            None => format!("Your expense '{}' was {}", updated.title, updated.status),
        };
        self.sink.deliver(Notification::new(
            updated.owner,
            title,
            message,
            severity,
            Some(id),
        ));
        Ok(updated)
    }

    /// Fetch one claim, scoped to the actor.
    ///
    /// Employees can only read their own claims.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` if the claim is missing and
    /// `PermissionDenied` if it belongs to another user.
    pub fn get(&self, actor: &Actor, id: ExpenseId) -> Result<Expense, LedgerError> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let expense = guard.get(&id).ok_or(LedgerError::NotFound(id))?;
        if expense.owner != actor.user_id && !actor.is_admin() {
            return Err(LedgerError::PermissionDenied("claim belongs to another user"));
        }
        Ok(expense.clone())
    }

    /// List claims matching the filter, scoped to the actor, newest
    /// submission first.
    ///
    /// Employees only see their own claims; admins see everyone's.
    #[must_use]
    pub fn query(&self, actor: &Actor, filter: &ExpenseFilter) -> Vec<Expense> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut results: Vec<Expense> = guard
            .values()
            .filter(|e| actor.is_admin() || e.owner == actor.user_id)
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        // Resubmission refreshes created_at, so this is not ID order
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        if let Some(limit) = filter.limit {
            results.truncate(limit);
        }
        debug!(count = results.len(), "expense query");
        results
    }

    /// Count claims denominated in the given currency.
    ///
    /// The currency registry uses this to decide between deactivating
    /// and hard-deleting a currency.
    #[must_use]
    pub fn currency_in_use(&self, code: &str) -> usize {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.values().filter(|e| e.currency_code == code).count()
    }

    /// Count claims filed under the given category.
    #[must_use]
    pub fn category_in_use(&self, name: &str) -> usize {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.values().filter(|e| e.category == name).count()
    }
}
