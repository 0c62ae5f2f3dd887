//! JSON flat-file storage backend.
//!
//! The on-disk format is one object keyed by normalized ingredient name,
//! each value holding `quantity`, `unit`, and `expiry` (`YYYY-MM-DD`).
//! Whole-file overwrite on every save; no partial-write recovery, no schema
//! versioning.

use std::fs;
use std::path::{Path, PathBuf};

use ovenstock_inventory::InventoryStore;

use crate::{InventoryStorage, StorageError};

/// File-backed inventory storage.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventoryStorage for JsonFileStorage {
    fn load(&self) -> Result<InventoryStore, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "inventory file not found, starting empty");
                return Ok(InventoryStore::new());
            }
            Err(err) => return Err(err.into()),
        };
        let store = serde_json::from_str(&text)?;
        Ok(store)
    }

    fn save(&self, store: &InventoryStore) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, text)?;
        tracing::debug!(path = %self.path.display(), items = store.len(), "inventory saved");
        Ok(())
    }
}
