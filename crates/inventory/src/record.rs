use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One ingredient's stock entry: how much is on hand, in what unit, and when
/// it expires. The name lives in the store key, not the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub quantity: f64,
    pub unit: String,
    pub expiry: NaiveDate,
}

impl IngredientRecord {
    pub fn new(quantity: f64, unit: impl Into<String>, expiry: NaiveDate) -> Self {
        Self {
            quantity,
            unit: unit.into(),
            expiry,
        }
    }
}
