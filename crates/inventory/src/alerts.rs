//! Stock alert scans.
//!
//! Pure reads over the store; the shell decides when to run them and how to
//! render the results.

use chrono::NaiveDate;

use ovenstock_core::IngredientName;

use crate::store::InventoryStore;

/// Minimum stock level below which an ingredient is flagged.
pub const DEFAULT_MIN_THRESHOLD: f64 = 5.0;

/// One low-stock finding.
#[derive(Debug, Clone, PartialEq)]
pub struct LowStockAlert {
    pub name: IngredientName,
    pub quantity: f64,
    pub unit: String,
}

/// One expired-ingredient finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiredItem {
    pub name: IngredientName,
    pub expiry: NaiveDate,
}

/// Every record with quantity strictly below `threshold`.
pub fn low_stock(store: &InventoryStore, threshold: f64) -> Vec<LowStockAlert> {
    store
        .iter()
        .filter(|(_, record)| record.quantity < threshold)
        .map(|(name, record)| LowStockAlert {
            name: name.clone(),
            quantity: record.quantity,
            unit: record.unit.clone(),
        })
        .collect()
}

/// Every record whose expiry date is strictly before `today`.
pub fn expired_items(store: &InventoryStore, today: NaiveDate) -> Vec<ExpiredItem> {
    store
        .iter()
        .filter(|(_, record)| record.expiry < today)
        .map(|(name, record)| ExpiredItem {
            name: name.clone(),
            expiry: record.expiry,
        })
        .collect()
}
