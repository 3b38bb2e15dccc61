//! Internal helpers for item validation and error mapping.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so every write path enforces the same invariants.

use sea_orm::{DbErr, SqlErr};

use crate::{Item, ResultStore, StoreError};

/// Trim a user supplied item name and reject empty names.
pub(crate) fn normalize_required_name(value: &str) -> ResultStore<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidInput(
            "item name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Normalize a lookup key the same way names are normalized on write.
pub(crate) fn normalize_key(value: &str) -> String {
    value.trim().to_string()
}

/// Check the invariants of an item about to be written.
///
/// Quantity and unit price must be non-negative and the derived total must fit
/// in an `i64` number of cents, so aggregating never relies on saturation.
pub(crate) fn validate_item(item: &Item) -> ResultStore<()> {
    if item.quantity < 0 {
        return Err(StoreError::InvalidInput(format!(
            "quantity for \"{}\" must be >= 0, got {}",
            item.name, item.quantity
        )));
    }
    if item.unit_price.is_negative() {
        return Err(StoreError::InvalidInput(format!(
            "unit price for \"{}\" must be >= 0, got {}",
            item.name, item.unit_price
        )));
    }
    if item.unit_price.checked_mul(item.quantity).is_none() {
        return Err(StoreError::InvalidInput(format!(
            "total value for \"{}\" is too large",
            item.name
        )));
    }
    Ok(())
}

/// Map a primary key violation raised by the database into a domain error.
pub(crate) fn on_unique_violation(
    err: DbErr,
    domain: impl FnOnce() -> StoreError,
) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => domain(),
        _ => StoreError::Database(err),
    }
}
