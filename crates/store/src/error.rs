//! The module contains the error the store can throw.
//!
//! Domain outcomes are expected results the caller renders to the user:
//!
//! - [`ExistingKey`] thrown when an item with the same name is already stored.
//! - [`KeyNotFound`] thrown when the requested item does not exist.
//! - [`Conflict`] thrown when a rename would collide with another item.
//! - [`InvalidInput`] thrown when a value breaks an item invariant.
//!
//! [`Database`] wraps a storage fault and is never a domain outcome.
//!
//!  [`ExistingKey`]: StoreError::ExistingKey
//!  [`KeyNotFound`]: StoreError::KeyNotFound
//!  [`Conflict`]: StoreError::Conflict
//!  [`InvalidInput`]: StoreError::InvalidInput
//!  [`Database`]: StoreError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Store custom errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl StoreError {
    /// Returns `true` for expected outcomes, `false` for storage faults.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::Database(_))
    }
}

impl PartialEq for StoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::Conflict(a), Self::Conflict(b)) => a == b,
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
