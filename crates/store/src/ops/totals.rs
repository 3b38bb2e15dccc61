use sea_orm::{
    ConnectionTrait, PaginatorTrait, QuerySelect, TransactionTrait, prelude::*, sea_query::Expr,
};

use crate::{Money, ResultStore, StoreError, item};

use super::{Store, with_tx};

/// Sum of `quantity * unit_price` over the stored items, in cents.
pub(super) async fn stored_total<C: ConnectionTrait>(db: &C) -> ResultStore<Money> {
    let total: Option<i64> = item::Entity::find()
        .select_only()
        .column_as(Expr::cust("SUM(\"Quantity\" * \"UnitPrice\")"), "total")
        .into_tuple::<Option<i64>>()
        .one(db)
        .await?
        .flatten();
    Ok(Money::new(total.unwrap_or_default()))
}

/// Inventory total after `removed` is replaced by `added`.
///
/// Fails with [`StoreError::InvalidInput`] when the result would not fit in
/// i64 cents, so a stored inventory can always be totalled.
pub(super) fn bounded_total(current: Money, removed: Money, added: Money) -> ResultStore<Money> {
    current
        .checked_sub(removed)
        .and_then(|total| total.checked_add(added))
        .ok_or_else(|| StoreError::InvalidInput("inventory total value would be too large".to_string()))
}

impl Store {
    /// Total value of the inventory: the sum of `quantity * unit_price` over
    /// every item, computed in cents by the database.
    ///
    /// Returns [`Money::ZERO`] when the inventory is empty.
    pub async fn total_value(&self) -> ResultStore<Money> {
        with_tx!(self, |db_tx| {
            let total = stored_total(&db_tx).await?;
            tracing::debug!(%total, "inventory total computed");
            Ok(total)
        })
    }

    /// Number of items in the inventory.
    pub async fn count(&self) -> ResultStore<u64> {
        with_tx!(self, |db_tx| {
            let count = item::Entity::find().count(&db_tx).await?;
            Ok(count)
        })
    }
}
