//! `ovenstock-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod name;
pub mod validate;

pub use error::{InventoryError, InventoryResult};
pub use name::IngredientName;
pub use validate::{parse_amount, validate_expiry, validate_unit};
