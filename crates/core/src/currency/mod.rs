//! Currency reference data and USD normalization.
//!
//! Currencies carry a USD-denominated rate (units per 1 USD) that is
//! consulted at submission time only. Expenses freeze the rate they were
//! submitted with; registry updates never touch historical records.
//!
//! # Modules
//!
//! - `types` - Currency domain types
//! - `registry` - In-memory currency registry
//! - `conversion` - USD normalization arithmetic
//! - `error` - Currency-specific error types

pub mod conversion;
pub mod error;
pub mod registry;
pub mod types;

pub use conversion::usd_normalize;
pub use error::CurrencyError;
pub use registry::CurrencyRegistry;
pub use types::{Currency, Removal};
