use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ovenstock_core::{IngredientName, InventoryError, InventoryResult};

use crate::record::IngredientRecord;

/// Outcome of a `use` operation that passed every check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UseOutcome {
    /// The deduction was confirmed and applied; carries the new quantity.
    Committed(f64),
    /// The caller withheld confirmation; nothing changed.
    Cancelled,
}

/// In-memory inventory: normalized name -> record.
///
/// Invariants: every quantity is non-negative, every unit is non-empty, every
/// key is in normalized form (guaranteed by [`IngredientName`]). Records are
/// never deleted; there is no remove operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryStore {
    items: BTreeMap<IngredientName, IngredientRecord>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new ingredient. Quantity must be positive and the unit
    /// non-empty; an existing key is rejected rather than overwritten.
    pub fn add(
        &mut self,
        name: IngredientName,
        quantity: f64,
        unit: &str,
        expiry: chrono::NaiveDate,
    ) -> InventoryResult<()> {
        if self.items.contains_key(&name) {
            return Err(InventoryError::AlreadyExists(name.to_string()));
        }
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(InventoryError::NonPositive(quantity));
        }
        let unit = unit.trim();
        if unit.is_empty() {
            return Err(InventoryError::EmptyUnit);
        }
        self.items
            .insert(name, IngredientRecord::new(quantity, unit, expiry));
        Ok(())
    }

    /// Deduct `amount` from the named ingredient.
    ///
    /// The deduction only commits if `confirm` affirms it; a declined
    /// confirmation is a clean cancellation, not an error. `confirm` is
    /// consulted only after every check has passed, so it sees the exact
    /// deduction that would be applied.
    pub fn use_ingredient(
        &mut self,
        name: &IngredientName,
        amount: f64,
        confirm: impl FnOnce(&IngredientName, f64) -> bool,
    ) -> InventoryResult<UseOutcome> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(InventoryError::NonPositive(amount));
        }
        let record = self
            .items
            .get_mut(name)
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))?;
        if amount > record.quantity {
            return Err(InventoryError::InsufficientStock {
                requested: amount,
                available: record.quantity,
            });
        }
        if !confirm(name, amount) {
            return Ok(UseOutcome::Cancelled);
        }
        record.quantity -= amount;
        Ok(UseOutcome::Committed(record.quantity))
    }

    /// Add `amount` to the named ingredient and return the new quantity.
    /// No confirmation step, unlike `use`.
    pub fn restock(&mut self, name: &IngredientName, amount: f64) -> InventoryResult<f64> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(InventoryError::NonPositive(amount));
        }
        let record = self
            .items
            .get_mut(name)
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))?;
        record.quantity += amount;
        Ok(record.quantity)
    }

    /// Normalized lookup of a single record.
    pub fn search(&self, name: &IngredientName) -> Option<&IngredientRecord> {
        self.items.get(name)
    }

    /// Read-only projection of every record.
    pub fn iter(&self) -> impl Iterator<Item = (&IngredientName, &IngredientRecord)> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
