//! Receipt file storage seam.
//!
//! The ledger keys attachments by `stored_name`; this module owns the
//! trait that turns those keys back into bytes. The report composer
//! takes any [`ReceiptStore`] so tests run against the in-memory
//! implementation.

pub mod error;

pub use error::StorageError;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Read access to stored receipt files.
pub trait ReceiptStore: Send + Sync {
    /// Fetch the bytes stored under `stored_name`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if nothing is stored under
    /// that name, or `StorageError::Io` for backend failures.
    fn fetch(&self, stored_name: &str) -> Result<Vec<u8>, StorageError>;
}

/// In-memory receipt store for tests and single-process use.
#[derive(Debug, Default)]
pub struct MemoryReceiptStore {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryReceiptStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store bytes under a name, replacing any previous content.
    pub fn put(&self, stored_name: impl Into<String>, bytes: Vec<u8>) {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(stored_name.into(), bytes);
    }

    /// Remove the file stored under `stored_name`, if any.
    pub fn remove(&self, stored_name: &str) {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(stored_name);
    }
}

impl ReceiptStore for MemoryReceiptStore {
    fn fetch(&self, stored_name: &str) -> Result<Vec<u8>, StorageError> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(stored_name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(stored_name.to_string()))
    }
}
