//! Text rendering of store results for the terminal.

use std::fmt::Write as _;

use store::{Item, Money, StoreError};

const RULE_WIDTH: usize = 50;

/// Result of a mutating command as shown to the user.
#[derive(Debug, PartialEq, Eq)]
pub enum Status {
    Done(String),
    Rejected(String),
}

impl Status {
    pub fn message(&self) -> &str {
        match self {
            Self::Done(msg) | Self::Rejected(msg) => msg,
        }
    }
}

/// Turn a store outcome into a status line. Storage faults are passed through.
pub fn outcome(result: Result<(), StoreError>, success: &str) -> Result<Status, StoreError> {
    match result {
        Ok(()) => Ok(Status::Done(success.to_string())),
        Err(StoreError::ExistingKey(_)) => Ok(Status::Rejected(
            "An item with that name already exists.".to_string(),
        )),
        Err(StoreError::KeyNotFound(_)) => Ok(Status::Rejected("Item not found.".to_string())),
        Err(StoreError::Conflict(_)) => Ok(Status::Rejected(
            "Another item already uses that name.".to_string(),
        )),
        Err(StoreError::InvalidInput(msg)) => Ok(Status::Rejected(format!("Invalid input: {msg}."))),
        Err(err @ StoreError::Database(_)) => Err(err),
    }
}

pub fn amount(symbol: &str, value: Money) -> String {
    if value.is_negative() {
        format!("-{symbol}{}", Money::new(-value.cents()))
    } else {
        format!("{symbol}{value}")
    }
}

/// Aligned table of items, one row per item.
pub fn inventory_table(items: &[Item], symbol: &str) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "Current Inventory:");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<20} {:>5}   {:>10}   {:>12}",
        "Name", "Qty", "Price", "Total"
    );
    let _ = writeln!(out, "{rule}");
    for item in items {
        let _ = writeln!(
            out,
            "{:<20} {:>5}   {:>10}   {:>12}",
            item.name,
            item.quantity,
            amount(symbol, item.unit_price),
            amount(symbol, item.total_value())
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}

pub fn total_line(symbol: &str, total: Money) -> String {
    format!("Total Inventory Value: {}", amount(symbol, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_columns() {
        let items = vec![
            Item::new("Widget", 10, Money::new(250)),
            Item::new("Gizmo", 7, Money::new(1999)),
        ];
        let table = inventory_table(&items, "$");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Current Inventory:");
        assert_eq!(lines[1], "-".repeat(50));
        assert_eq!(
            lines[2],
            "Name                   Qty        Price          Total"
        );
        assert_eq!(
            lines[4],
            "Widget                  10        $2.50         $25.00"
        );
        assert_eq!(
            lines[5],
            "Gizmo                    7       $19.99        $139.93"
        );
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn total_uses_symbol() {
        assert_eq!(total_line("$", Money::ZERO), "Total Inventory Value: $0.00");
        assert_eq!(amount("€", Money::new(-5)), "-€0.05");
    }

    #[test]
    fn domain_errors_become_messages() {
        assert_eq!(
            outcome(Ok(()), "Item added successfully.").unwrap(),
            Status::Done("Item added successfully.".to_string())
        );
        assert_eq!(
            outcome(Err(StoreError::KeyNotFound("x".to_string())), "ok")
                .unwrap()
                .message(),
            "Item not found."
        );
        assert!(matches!(
            outcome(Err(StoreError::ExistingKey("x".to_string())), "ok"),
            Ok(Status::Rejected(_))
        ));
        assert!(
            outcome(
                Err(StoreError::Database(sea_orm::DbErr::Custom(
                    "locked".to_string()
                ))),
                "ok"
            )
            .is_err()
        );
    }
}
