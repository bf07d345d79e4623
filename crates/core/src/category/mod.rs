//! Expense category reference data.
//!
//! Categories are free-form labels on expenses; the registry here is the
//! administrative surface for maintaining the available set. Removal
//! follows the same rule as currencies: deactivate when referenced,
//! delete when not.

pub mod error;
pub mod registry;
pub mod types;

pub use error::CategoryError;
pub use registry::CategoryRegistry;
pub use types::Category;
