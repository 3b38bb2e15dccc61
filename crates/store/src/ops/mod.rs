use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::{Money, ResultStore};

mod items;
mod totals;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

/// Like [`with_tx`], holding the store write lock until the transaction ends.
///
/// Writers are serialized so a read-check-write sequence cannot interleave
/// with another writer of the same process.
macro_rules! with_write_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let _write_guard = $self.write_lock.lock().await;
        $crate::ops::with_tx!($self, |$tx| $body)
    }};
}

pub(crate) use with_tx;
pub(crate) use with_write_tx;

/// Changes requested by [`Store::update`].
///
/// A `None` field keeps the value currently stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    /// New primary key for the item (rename).
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub unit_price: Option<Money>,
}

/// The inventory store.
///
/// Owns the database handle for its whole lifetime; each operation is a
/// transaction on that handle.
#[derive(Debug)]
pub struct Store {
    database: DatabaseConnection,
    write_lock: Mutex<()>,
}

impl Store {
    /// Return a builder for `Store`. Help to build the struct.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }
}

/// The builder for `Store`
#[derive(Default)]
pub struct StoreBuilder {
    database: DatabaseConnection,
}

impl StoreBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> StoreBuilder {
        self.database = db;
        self
    }

    /// Construct `Store`, creating the `Items` table if it is missing.
    pub async fn build(self) -> ResultStore<Store> {
        Migrator::up(&self.database, None).await?;
        tracing::debug!("inventory schema ready");
        Ok(Store {
            database: self.database,
            write_lock: Mutex::new(()),
        })
    }
}
