//! Core business logic for Claimdesk.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Expense records, validation, and atomic mutations
//! - `workflow` - Approval state machine (pending → approved/rejected)
//! - `currency` - Currency registry and USD normalization
//! - `category` - Expense category reference data
//! - `stats` - Aggregate statistics and cross-tabs over a ledger snapshot
//! - `report` - Spreadsheet report composition and image embed geometry
//! - `notification` - Notification types and delivery seam
//! - `storage` - Receipt byte storage seam

pub mod actor;
pub mod category;
pub mod currency;
pub mod ids;
pub mod ledger;
pub mod notification;
pub mod report;
pub mod stats;
pub mod storage;
pub mod workflow;
