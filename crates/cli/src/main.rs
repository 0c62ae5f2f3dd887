mod menu;
mod shell;

use anyhow::Context;

use ovenstock_inventory::DEFAULT_MIN_THRESHOLD;
use ovenstock_storage::{InventoryStorage, JsonFileStorage};

use crate::shell::Shell;

fn main() -> anyhow::Result<()> {
    ovenstock_observability::init();

    let path = std::env::var("OVENSTOCK_FILE").unwrap_or_else(|_| "inventory.json".to_string());
    let threshold = match std::env::var("OVENSTOCK_MIN_THRESHOLD") {
        Ok(text) => text.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %text, "invalid OVENSTOCK_MIN_THRESHOLD, using default");
            DEFAULT_MIN_THRESHOLD
        }),
        Err(_) => DEFAULT_MIN_THRESHOLD,
    };

    let storage = JsonFileStorage::new(&path);
    let store = storage
        .load()
        .with_context(|| format!("failed to load inventory from {path}"))?;
    tracing::info!(path = %path, items = store.len(), "inventory loaded");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), storage, store, threshold);
    shell.run().context("session ended with an IO failure")?;
    Ok(())
}
