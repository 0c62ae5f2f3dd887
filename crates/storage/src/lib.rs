//! Persistence seam for the inventory store.
//!
//! The domain crates never touch the filesystem; everything goes through
//! [`InventoryStorage`], with a JSON flat-file implementation as the only
//! production backend.

pub mod json;

use ovenstock_inventory::InventoryStore;
use thiserror::Error;

/// Storage-layer error. Kept separate from the domain error model:
/// infrastructure failures are not user-retry conditions.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("inventory file IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("inventory file is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Load/save contract for the persisted inventory.
pub trait InventoryStorage {
    /// Read the persisted store. An absent backing file is an empty store,
    /// not an error.
    fn load(&self) -> Result<InventoryStore, StorageError>;

    /// Serialize the full store, overwriting prior persisted state.
    fn save(&self, store: &InventoryStore) -> Result<(), StorageError>;
}

pub use json::JsonFileStorage;
