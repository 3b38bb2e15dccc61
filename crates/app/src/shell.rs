//! Interactive numbered menu over the store.

use std::io::{BufRead, Write};

use store::{ItemUpdate, Money, Store};

use crate::{
    error::Result,
    render::{self, Status},
};

const MENU: &str = "\nInventory Management System (SQLite)
1. Add Item
2. View Inventory
3. Update Item
4. Remove Item
5. Calculate Total Value
6. Exit";

pub struct Shell<'a, R, W> {
    store: &'a Store,
    symbol: &'a str,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a Store, symbol: &'a str, input: R, output: W) -> Self {
        Self {
            store,
            symbol,
            input,
            output,
        }
    }

    /// Loop until the user picks "Exit" or input ends.
    pub async fn run(mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.add().await?,
                "2" => self.view().await?,
                "3" => self.update().await?,
                "4" => self.remove().await?,
                "5" => self.total().await?,
                "6" => break,
                _ => writeln!(self.output, "Invalid option. Please select 1-6.")?,
            }
        }
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    /// Print `label` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn show(&mut self, status: &Status) -> Result<()> {
        writeln!(self.output, "{}", status.message())?;
        Ok(())
    }

    async fn add(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter item name: ")? else {
            return Ok(());
        };
        let Some(quantity) = self.prompt("Enter quantity: ")? else {
            return Ok(());
        };
        let Ok(quantity) = quantity.parse::<i64>() else {
            writeln!(self.output, "Invalid quantity.")?;
            return Ok(());
        };
        let Some(price) = self.prompt("Enter unit price: ")? else {
            return Ok(());
        };
        let Ok(price) = price.parse::<Money>() else {
            writeln!(self.output, "Invalid price.")?;
            return Ok(());
        };

        let result = self.store.add(&name, quantity, price).await;
        let status = render::outcome(result, "Item added successfully.")?;
        self.show(&status)
    }

    async fn view(&mut self) -> Result<()> {
        let items = self.store.list().await?;
        if items.is_empty() {
            writeln!(self.output, "Inventory is empty.")?;
        } else {
            write!(
                self.output,
                "\n{}",
                render::inventory_table(&items, self.symbol)
            )?;
        }
        Ok(())
    }

    async fn update(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter the name of the item to update: ")? else {
            return Ok(());
        };
        let current = match self.store.item(&name).await {
            Ok(item) => item,
            Err(err) => {
                let status = render::outcome(Err(err), "")?;
                return self.show(&status);
            }
        };

        let label = format!(
            "Enter new name (current: {}, press Enter to keep): ",
            current.name
        );
        let new_name = self.prompt(&label)?.filter(|s| !s.is_empty());

        // Unparsable numbers keep the stored value, like an empty answer.
        let label = format!(
            "Enter new quantity (current: {}, press Enter to keep): ",
            current.quantity
        );
        let quantity = self.prompt(&label)?.and_then(|s| s.parse::<i64>().ok());

        let label = format!(
            "Enter new unit price (current: {}, press Enter to keep): ",
            render::amount(self.symbol, current.unit_price)
        );
        let unit_price = self.prompt(&label)?.and_then(|s| s.parse::<Money>().ok());

        let changes = ItemUpdate {
            name: new_name,
            quantity,
            unit_price,
        };
        let result = self.store.update(&current.name, changes).await;
        let status = render::outcome(result, "Item updated successfully.")?;
        self.show(&status)
    }

    async fn remove(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter the name of the item to remove: ")? else {
            return Ok(());
        };
        let result = self.store.remove(&name).await;
        let status = render::outcome(result, "Item removed successfully.")?;
        self.show(&status)
    }

    async fn total(&mut self) -> Result<()> {
        let total = self.store.total_value().await?;
        writeln!(self.output, "\n{}", render::total_line(self.symbol, total))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectOptions, Database};

    use super::*;

    async fn store() -> Store {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options).await.unwrap();
        Store::builder().database(db).build().await.unwrap()
    }

    async fn drive(store: &Store, script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(store, "$", script.as_bytes(), &mut output)
            .run()
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn add_view_total_exit() {
        let store = store().await;
        let out = drive(&store, "1\nWidget\n10\n2.50\n2\n5\n6\n").await;

        assert!(out.contains("Item added successfully."));
        assert!(out.contains("Widget                  10        $2.50         $25.00"));
        assert!(out.contains("Total Inventory Value: $25.00"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn add_rejects_unparsable_numbers() {
        let store = store().await;
        let out = drive(&store, "1\nWidget\nten\n1\nWidget\n1\nfree\n").await;

        assert!(out.contains("Invalid quantity."));
        assert!(out.contains("Invalid price."));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn duplicate_add_reports_existing() {
        let store = store().await;
        store.add("A", 5, Money::new(100)).await.unwrap();

        let out = drive(&store, "1\nA\n3\n9.00\n6\n").await;
        assert!(out.contains("An item with that name already exists."));
        assert_eq!(store.item("A").await.unwrap().quantity, 5);
    }

    #[tokio::test]
    async fn update_keeps_blank_and_unparsable_fields() {
        let store = store().await;
        store.add("B", 2, Money::new(300)).await.unwrap();

        let out = drive(&store, "3\nB\n\n7\nabc\n6\n").await;
        assert!(out.contains("Item updated successfully."));

        let item = store.item("B").await.unwrap();
        assert_eq!(item.quantity, 7);
        assert_eq!(item.unit_price, Money::new(300));
    }

    #[tokio::test]
    async fn update_and_remove_missing_item() {
        let store = store().await;
        let out = drive(&store, "3\nMissing\n4\nMissing\n6\n").await;
        assert_eq!(out.matches("Item not found.").count(), 2);
    }

    #[tokio::test]
    async fn empty_inventory_and_bad_option() {
        let store = store().await;
        let out = drive(&store, "2\n9\n").await;
        assert!(out.contains("Inventory is empty."));
        assert!(out.contains("Invalid option. Please select 1-6."));
        assert!(out.ends_with("Goodbye!\n"));
    }
}
