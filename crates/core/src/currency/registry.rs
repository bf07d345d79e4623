//! In-memory currency registry.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use rust_decimal::Decimal;

use super::error::CurrencyError;
use super::types::{Currency, Removal};

/// Registry of known currencies, keyed by code.
///
/// Consulted at submission time only: the rate an expense is created with
/// is frozen onto the expense, so later `update` calls never alter
/// historical records.
#[derive(Debug, Default)]
pub struct CurrencyRegistry {
    inner: RwLock<BTreeMap<String, Currency>>,
}

impl CurrencyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new currency.
    ///
    /// # Errors
    ///
    /// Fails if the code is already registered, the rate is not positive,
    /// or a required field is empty.
    pub fn register(
        &self,
        code: &str,
        name: &str,
        symbol: &str,
        rate: Decimal,
    ) -> Result<(), CurrencyError> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(CurrencyError::MissingField("code"));
        }
        if name.trim().is_empty() {
            return Err(CurrencyError::MissingField("name"));
        }
        if symbol.trim().is_empty() {
            return Err(CurrencyError::MissingField("symbol"));
        }
        if rate <= Decimal::ZERO {
            return Err(CurrencyError::NonPositiveRate(rate));
        }

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.contains_key(&code) {
            return Err(CurrencyError::CodeExists(code));
        }
        inner.insert(
            code.clone(),
            Currency {
                code,
                name: name.trim().to_string(),
                symbol: symbol.trim().to_string(),
                rate,
                active: true,
                created_at: Utc::now(),
            },
        );
        Ok(())
    }

    /// Updates name, symbol, and rate of an existing currency.
    ///
    /// Does not touch historical expenses: their rate snapshots are frozen.
    pub fn update(
        &self,
        code: &str,
        name: &str,
        symbol: &str,
        rate: Decimal,
    ) -> Result<(), CurrencyError> {
        if name.trim().is_empty() {
            return Err(CurrencyError::MissingField("name"));
        }
        if symbol.trim().is_empty() {
            return Err(CurrencyError::MissingField("symbol"));
        }
        if rate <= Decimal::ZERO {
            return Err(CurrencyError::NonPositiveRate(rate));
        }

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let currency = inner
            .get_mut(&code.to_uppercase())
            .ok_or_else(|| CurrencyError::NotFound(code.to_string()))?;
        currency.name = name.trim().to_string();
        currency.symbol = symbol.trim().to_string();
        currency.rate = rate;
        Ok(())
    }

    /// Removes a currency if unreferenced, otherwise deactivates it.
    ///
    /// `in_use` is whether any expense references the code; the ledger is
    /// the source of truth for that, so the caller supplies it.
    pub fn remove_or_deactivate(&self, code: &str, in_use: bool) -> Result<Removal, CurrencyError> {
        let code = code.to_uppercase();
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if !inner.contains_key(&code) {
            return Err(CurrencyError::NotFound(code));
        }
        if in_use {
            if let Some(currency) = inner.get_mut(&code) {
                currency.active = false;
            }
            Ok(Removal::Deactivated)
        } else {
            inner.remove(&code);
            Ok(Removal::Deleted)
        }
    }

    /// Reactivates a deactivated currency.
    ///
    /// # Errors
    ///
    /// Fails if the currency is unknown or already active.
    pub fn reactivate(&self, code: &str) -> Result<(), CurrencyError> {
        let code = code.to_uppercase();
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let currency = inner
            .get_mut(&code)
            .ok_or_else(|| CurrencyError::NotFound(code.clone()))?;
        if currency.active {
            return Err(CurrencyError::AlreadyActive(code));
        }
        currency.active = true;
        Ok(())
    }

    /// Returns active currencies ordered by code.
    #[must_use]
    pub fn list_active(&self) -> Vec<Currency> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.values().filter(|c| c.active).cloned().collect()
    }

    /// Returns all currencies (including inactive) ordered by code.
    #[must_use]
    pub fn list_all(&self) -> Vec<Currency> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.values().cloned().collect()
    }

    /// Looks up a currency by code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Currency> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.get(&code.to_uppercase()).cloned()
    }
}
