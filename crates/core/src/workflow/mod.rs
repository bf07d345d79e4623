//! Approval workflow for expense claims.
//!
//! Implements the expense lifecycle state machine: claims start `pending`,
//! an administrator moves them to `approved` or `rejected`, and an edit
//! (resubmission) returns them to `pending`.
//!
//! # Modules
//!
//! - `types` - Workflow domain types (ExpenseStatus, ApprovalAction)
//! - `error` - Workflow-specific error types
//! - `service` - State transition logic

pub mod error;
pub mod service;
pub mod types;

pub use error::WorkflowError;
pub use service::WorkflowService;
pub use types::{ApprovalAction, ExpenseStatus};
