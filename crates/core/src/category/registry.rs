//! In-memory category registry.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use super::error::CategoryError;
use super::types::Category;
use crate::currency::Removal;

/// Labels seeded by the default catalog import.
const DEFAULT_CATALOG: &[(&str, &str)] = &[
    ("Tolls & Parking", "Road tolls, tunnel fees, and parking charges"),
    ("Repairs", "Maintenance and repair of equipment and vehicles"),
    ("Office Supplies", "Day-to-day office consumables and small equipment"),
    ("Fuel", "Fuel for company and business-trip vehicles"),
    ("Living Allowance", "Meal, commute, and related employee allowances"),
    ("Utilities", "Water, electricity, and gas for office premises"),
    ("Lodging", "Hotel stays during business travel"),
    ("Staff Welfare", "Holiday gifts, team events, health checks, training"),
    ("Business Entertainment", "Client meals and reception costs"),
    ("Advertising", "Marketing campaigns, materials, and trade shows"),
    ("Freight", "Courier, logistics, and warehousing charges"),
    ("Bank Charges", "Banking, remittance, certification, and service fees"),
    ("Non-operating Expense", "Donations, fines, and asset disposal losses"),
    ("Wages", "Salary, bonus, and allowance payroll costs"),
    ("Rent", "Office, equipment, and vehicle lease payments"),
    ("Other Receivables", "Advances, deposits, and unclassified items"),
];

/// Registry of expense categories, keyed by name.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    inner: RwLock<BTreeMap<String, Category>>,
}

impl CategoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the default catalog.
    #[must_use]
    pub fn with_default_catalog() -> Self {
        let registry = Self::new();
        for (name, description) in DEFAULT_CATALOG {
            // Fresh registry, names are unique by construction.
            let _ = registry.register(name, description);
        }
        registry
    }

    /// Registers a new category.
    pub fn register(&self, name: &str, description: &str) -> Result<(), CategoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CategoryError::NameRequired);
        }
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.contains_key(name) {
            return Err(CategoryError::NameExists(name.to_string()));
        }
        inner.insert(
            name.to_string(),
            Category {
                name: name.to_string(),
                description: description.trim().to_string(),
                active: true,
                created_at: Utc::now(),
            },
        );
        Ok(())
    }

    /// Updates a category's description.
    pub fn update(&self, name: &str, description: &str) -> Result<(), CategoryError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let category = inner
            .get_mut(name.trim())
            .ok_or_else(|| CategoryError::NotFound(name.to_string()))?;
        category.description = description.trim().to_string();
        Ok(())
    }

    /// Removes a category if unreferenced, otherwise deactivates it.
    pub fn remove_or_deactivate(&self, name: &str, in_use: bool) -> Result<Removal, CategoryError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if !inner.contains_key(name) {
            return Err(CategoryError::NotFound(name.to_string()));
        }
        if in_use {
            if let Some(category) = inner.get_mut(name) {
                category.active = false;
            }
            Ok(Removal::Deactivated)
        } else {
            inner.remove(name);
            Ok(Removal::Deleted)
        }
    }

    /// Reactivates a deactivated category.
    pub fn reactivate(&self, name: &str) -> Result<(), CategoryError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let category = inner
            .get_mut(name)
            .ok_or_else(|| CategoryError::NotFound(name.to_string()))?;
        if category.active {
            return Err(CategoryError::AlreadyActive(name.to_string()));
        }
        category.active = true;
        Ok(())
    }

    /// Returns active categories ordered by name.
    #[must_use]
    pub fn list_active(&self) -> Vec<Category> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.values().filter(|c| c.active).cloned().collect()
    }

    /// Returns all categories (including inactive) ordered by name.
    #[must_use]
    pub fn list_all(&self) -> Vec<Category> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.values().cloned().collect()
    }

    /// Looks up a category by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Category> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.get(name).cloned()
    }
}
