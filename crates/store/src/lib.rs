//! Persistence and query layer of the inventory ledger.
//!
//! [`Store`] owns a long-lived database handle and exposes add, list, update,
//! remove and aggregate-value operations over [`Item`] records. Every
//! operation runs in its own database transaction.

pub use error::StoreError;
pub use item::Item;
pub use money::Money;
pub use ops::{ItemUpdate, Store, StoreBuilder};

mod error;
mod item;
mod money;
mod ops;
mod util;

type ResultStore<T> = Result<T, StoreError>;
