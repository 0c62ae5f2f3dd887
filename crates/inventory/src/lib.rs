//! Inventory domain module.
//!
//! This crate contains the business rules for bakery stock, implemented
//! purely as deterministic domain logic (no IO, no prompting, no storage).

pub mod alerts;
pub mod record;
pub mod store;

pub use alerts::{DEFAULT_MIN_THRESHOLD, ExpiredItem, LowStockAlert, expired_items, low_stock};
pub use record::IngredientRecord;
pub use store::{InventoryStore, UseOutcome};
