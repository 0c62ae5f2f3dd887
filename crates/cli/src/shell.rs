//! Interactive menu shell.
//!
//! All prompting, retry loops, and rendering live here; the library crates
//! own every rule. Generic over the input/output streams so sessions can be
//! driven by string buffers in tests.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use ovenstock_auth::{Role, authorize, permissions_for};
use ovenstock_core::{IngredientName, parse_amount, validate_expiry, validate_unit};
use ovenstock_inventory::{InventoryStore, UseOutcome, expired_items, low_stock};
use ovenstock_storage::InventoryStorage;

use crate::menu::MenuChoice;

pub struct Shell<R, W, S> {
    input: R,
    output: W,
    storage: S,
    store: InventoryStore,
    threshold: f64,
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// y/n confirmation for a pending deduction. Anything but an affirmative
/// answer (EOF and IO failure included) counts as a decline.
fn confirm_use<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: &IngredientName,
    amount: f64,
) -> bool {
    let answer = (|| -> io::Result<bool> {
        write!(output, "Confirm using {amount} from {name}? (y/n): ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        Ok(line.trim().eq_ignore_ascii_case("y"))
    })();
    answer.unwrap_or(false)
}

impl<R: BufRead, W: Write, S: InventoryStorage> Shell<R, W, S> {
    pub fn new(input: R, output: W, storage: S, store: InventoryStore, threshold: f64) -> Self {
        Self {
            input,
            output,
            storage,
            store,
            threshold,
        }
    }

    /// Run one session: role prompt, then the menu loop until exit or EOF.
    pub fn run(&mut self) -> io::Result<()> {
        let Some(role_text) = self.prompt("Enter your role (Admin/Staff): ")? else {
            return Ok(());
        };
        let role = Role::parse(&role_text);
        let permissions = permissions_for(role);
        let granted: Vec<&str> = permissions.iter().map(|c| c.as_str()).collect();
        writeln!(
            self.output,
            "Welcome, {role}! Permissions granted: {}",
            granted.join(", ")
        )?;
        tracing::info!(%role, "session started");

        loop {
            self.render_menu()?;
            // Low-stock scan on every menu render, as the bakery wants
            // constant stock visibility.
            self.low_stock_report()?;
            let Some(choice_text) = self.prompt("Enter your choice (1-6): ")? else {
                break;
            };
            let choice = match MenuChoice::parse(&choice_text) {
                Ok(choice) => choice,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            if choice == MenuChoice::Exit {
                writeln!(self.output, "Exiting bakery inventory.")?;
                break;
            }
            if let Some(capability) = choice.capability()
                && let Err(err) = authorize(&permissions, capability)
            {
                writeln!(self.output, "{err}")?;
                continue;
            }
            match choice {
                MenuChoice::AddIngredient => self.add_flow()?,
                MenuChoice::ViewStock => self.view_flow()?,
                MenuChoice::UpdateIngredient => self.update_flow()?,
                MenuChoice::SearchIngredient => self.search_flow()?,
                MenuChoice::CheckExpiry => self.expiry_flow()?,
                MenuChoice::Exit => {}
            }
        }
        Ok(())
    }

    fn render_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Inventory Menu ---")?;
        writeln!(self.output, "1. Add new ingredient")?;
        writeln!(self.output, "2. Check all stock levels")?;
        writeln!(self.output, "3. Update ingredient (use/restock)")?;
        writeln!(self.output, "4. Search ingredient")?;
        writeln!(self.output, "5. Check for expired ingredients")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    fn low_stock_report(&mut self) -> io::Result<()> {
        writeln!(self.output, "--- Low Stock Check ---")?;
        let alerts = low_stock(&self.store, self.threshold);
        if alerts.is_empty() {
            writeln!(self.output, "All items are above the minimum threshold.")?;
        } else {
            for alert in alerts {
                writeln!(
                    self.output,
                    "ALERT: Low stock on {}, only {} {} left!",
                    alert.name, alert.quantity, alert.unit
                )?;
            }
        }
        Ok(())
    }

    fn add_flow(&mut self) -> io::Result<()> {
        let Some(raw) = self.prompt("Enter ingredient name: ")? else {
            return Ok(());
        };
        let name = IngredientName::new(&raw);
        if self.store.search(&name).is_some() {
            writeln!(self.output, "Ingredient already exists.")?;
            return Ok(());
        }
        let Some(quantity_text) = self.prompt("Enter quantity: ")? else {
            return Ok(());
        };
        let quantity = match parse_amount(&quantity_text) {
            Ok(quantity) => quantity,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        };
        let Some(unit_text) = self.prompt("Enter unit (e.g. kg, litres): ")? else {
            return Ok(());
        };
        let unit = match validate_unit(&unit_text) {
            Ok(unit) => unit,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        };
        // Reject until valid input supplied; the retry loop belongs to the
        // shell, not the validator.
        let expiry = loop {
            let Some(text) = self.prompt("Enter expiry date (YYYY-MM-DD): ")? else {
                return Ok(());
            };
            match validate_expiry(&text, today()) {
                Ok(date) => break date,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        };
        match self.store.add(name.clone(), quantity, &unit, expiry) {
            Ok(()) => {
                self.persist();
                writeln!(self.output, "Added {name} successfully.")?;
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn view_flow(&mut self) -> io::Result<()> {
        writeln!(self.output, "--- Current Inventory ---")?;
        if self.store.is_empty() {
            writeln!(self.output, "Inventory is empty.")?;
            return Ok(());
        }
        for (name, record) in self.store.iter() {
            writeln!(
                self.output,
                "{name}: {} {} (expires {})",
                record.quantity, record.unit, record.expiry
            )?;
        }
        Ok(())
    }

    fn update_flow(&mut self) -> io::Result<()> {
        let Some(raw) = self.prompt("Enter ingredient name: ")? else {
            return Ok(());
        };
        let name = IngredientName::new(&raw);
        if self.store.search(&name).is_none() {
            writeln!(self.output, "Ingredient not found.")?;
            return Ok(());
        }
        let Some(action) = self.prompt("Type 'use' to deduct or 'restock' to add: ")? else {
            return Ok(());
        };
        match action.trim().to_lowercase().as_str() {
            "use" => self.use_flow(&name)?,
            "restock" => self.restock_flow(&name)?,
            _ => writeln!(self.output, "Invalid action.")?,
        }
        Ok(())
    }

    fn use_flow(&mut self, name: &IngredientName) -> io::Result<()> {
        let Some(text) = self.prompt(&format!("Enter amount to use for {name}: "))? else {
            return Ok(());
        };
        let amount = match parse_amount(&text) {
            Ok(amount) => amount,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        };
        // Split field borrows: the confirmation closure needs the streams
        // while the store is being mutated.
        let Self {
            input,
            output,
            store,
            ..
        } = self;
        let result = store.use_ingredient(name, amount, |name, amount| {
            confirm_use(input, output, name, amount)
        });
        match result {
            Ok(UseOutcome::Committed(new_quantity)) => {
                self.persist();
                self.report_new_quantity(name, new_quantity)?;
                self.low_stock_report()?;
            }
            Ok(UseOutcome::Cancelled) => writeln!(self.output, "Cancelled.")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn restock_flow(&mut self, name: &IngredientName) -> io::Result<()> {
        let Some(text) = self.prompt(&format!("Enter amount to restock for {name}: "))? else {
            return Ok(());
        };
        let amount = match parse_amount(&text) {
            Ok(amount) => amount,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(());
            }
        };
        match self.store.restock(name, amount) {
            Ok(new_quantity) => {
                self.persist();
                self.report_new_quantity(name, new_quantity)?;
                self.low_stock_report()?;
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn search_flow(&mut self) -> io::Result<()> {
        let Some(raw) = self.prompt("Search for ingredient: ")? else {
            return Ok(());
        };
        let name = IngredientName::new(&raw);
        match self.store.search(&name) {
            Some(record) => writeln!(
                self.output,
                "{name}: {} {} (expires {})",
                record.quantity, record.unit, record.expiry
            )?,
            None => {
                writeln!(self.output, "Ingredient not found.")?;
                self.low_stock_report()?;
            }
        }
        Ok(())
    }

    fn expiry_flow(&mut self) -> io::Result<()> {
        let expired = expired_items(&self.store, today());
        if expired.is_empty() {
            writeln!(self.output, "No expired items.")?;
            return Ok(());
        }
        writeln!(self.output, "--- Expired Ingredients ---")?;
        for item in expired {
            writeln!(self.output, "{} expired on {}", item.name, item.expiry)?;
        }
        Ok(())
    }

    fn report_new_quantity(&mut self, name: &IngredientName, quantity: f64) -> io::Result<()> {
        if let Some(record) = self.store.search(name) {
            writeln!(
                self.output,
                "{name} updated. New quantity: {quantity} {}",
                record.unit
            )?;
        }
        Ok(())
    }

    /// Write the store back after a successful mutation. A failed save is
    /// logged and the session continues with its in-memory state.
    fn persist(&mut self) {
        if let Err(err) = self.storage.save(&self.store) {
            tracing::error!(error = %err, "failed to save inventory");
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use ovenstock_storage::StorageError;

    /// Recording stub so tests can assert when saves happen.
    #[derive(Default)]
    struct MemoryStorage {
        saves: RefCell<Vec<InventoryStore>>,
    }

    impl InventoryStorage for MemoryStorage {
        fn load(&self) -> Result<InventoryStore, StorageError> {
            Ok(self
                .saves
                .borrow()
                .last()
                .cloned()
                .unwrap_or_default())
        }

        fn save(&self, store: &InventoryStore) -> Result<(), StorageError> {
            self.saves.borrow_mut().push(store.clone());
            Ok(())
        }
    }

    fn stocked_store() -> InventoryStore {
        let mut store = InventoryStore::new();
        store
            .add(
                IngredientName::new("flour"),
                10.0,
                "kg",
                NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            )
            .unwrap();
        store
    }

    fn run_session(script: &str, store: InventoryStore) -> (String, InventoryStore, usize) {
        let input = io::Cursor::new(script.to_string());
        let mut output = Vec::new();
        let mut shell = Shell::new(input, &mut output, MemoryStorage::default(), store, 5.0);
        shell.run().unwrap();
        let saves = shell.storage.saves.borrow().len();
        let store = shell.store.clone();
        (String::from_utf8(output).unwrap(), store, saves)
    }

    #[test]
    fn staff_is_refused_add_with_a_visible_denial() {
        let (output, store, saves) = run_session("staff\n1\n6\n", InventoryStore::new());
        assert!(output.contains("access denied: missing permission 'add'"));
        assert!(store.is_empty());
        assert_eq!(saves, 0);
    }

    #[test]
    fn admin_add_flow_inserts_and_persists() {
        let (output, store, saves) =
            run_session("admin\n1\nflour\n10\nkg\n2099-01-01\n6\n", InventoryStore::new());
        assert!(output.contains("Added Flour successfully."));
        assert_eq!(
            store
                .search(&IngredientName::new("flour"))
                .unwrap()
                .quantity,
            10.0
        );
        assert_eq!(saves, 1);
    }

    #[test]
    fn add_retries_the_expiry_prompt_until_valid() {
        let (output, store, _) = run_session(
            "admin\n1\nmilk\n4\nlitres\nnot-a-date\n2099-06-01\n6\n",
            InventoryStore::new(),
        );
        assert!(output.contains("invalid date format"));
        assert!(output.contains("Added Milk successfully."));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_add_is_rejected_before_any_prompting() {
        let (output, store, saves) = run_session("admin\n1\nFLOUR\n6\n", stocked_store());
        assert!(output.contains("Ingredient already exists."));
        assert_eq!(store.len(), 1);
        assert_eq!(saves, 0);
    }

    #[test]
    fn confirmed_use_deducts_persists_and_reports() {
        let (output, store, saves) =
            run_session("staff\n3\nflour\nuse\n2.5\ny\n6\n", stocked_store());
        assert!(output.contains("Flour updated. New quantity: 7.5 kg"));
        assert_eq!(
            store
                .search(&IngredientName::new("flour"))
                .unwrap()
                .quantity,
            7.5
        );
        assert_eq!(saves, 1);
    }

    #[test]
    fn declined_use_cancels_without_saving() {
        let (output, store, saves) =
            run_session("staff\n3\nflour\nuse\n2.5\nn\n6\n", stocked_store());
        assert!(output.contains("Cancelled."));
        assert_eq!(
            store
                .search(&IngredientName::new("flour"))
                .unwrap()
                .quantity,
            10.0
        );
        assert_eq!(saves, 0);
    }

    #[test]
    fn oversized_use_reports_insufficient_stock() {
        let (output, store, _) = run_session("staff\n3\nflour\nuse\n50\n6\n", stocked_store());
        assert!(output.contains("not enough in stock"));
        assert_eq!(
            store
                .search(&IngredientName::new("flour"))
                .unwrap()
                .quantity,
            10.0
        );
    }

    #[test]
    fn restock_needs_no_confirmation() {
        let (output, store, saves) =
            run_session("staff\n3\nflour\nrestock\n5\n6\n", stocked_store());
        assert!(output.contains("Flour updated. New quantity: 15 kg"));
        assert_eq!(
            store
                .search(&IngredientName::new("flour"))
                .unwrap()
                .quantity,
            15.0
        );
        assert_eq!(saves, 1);
    }

    #[test]
    fn failed_search_reports_not_found_then_scans_low_stock() {
        let (output, _, _) = run_session("staff\n4\nsaffron\n6\n", stocked_store());
        let not_found = output.find("Ingredient not found.").unwrap();
        let scan = output.rfind("--- Low Stock Check ---").unwrap();
        assert!(scan > not_found);
    }

    #[test]
    fn invalid_menu_choice_recovers_to_the_menu() {
        let (output, _, _) = run_session("staff\n9\n6\n", InventoryStore::new());
        assert!(output.contains("invalid choice: '9'"));
        assert!(output.contains("Exiting bakery inventory."));
    }

    #[test]
    fn low_stock_scan_runs_on_every_menu_render() {
        let mut store = InventoryStore::new();
        store
            .add(
                IngredientName::new("milk"),
                3.0,
                "litres",
                NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            )
            .unwrap();
        let (output, _, _) = run_session("staff\n6\n", store);
        assert!(output.contains("ALERT: Low stock on Milk, only 3 litres left!"));
    }

    #[test]
    fn unknown_role_is_greeted_as_staff() {
        let (output, _, _) = run_session("baker\n6\n", InventoryStore::new());
        assert!(output.contains("Welcome, Staff!"));
        assert!(output.contains("Permissions granted: view, update, search"));
    }
}
