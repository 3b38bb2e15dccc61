use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*, sea_query::Expr};

use crate::{
    Item, Money, ResultStore, StoreError, item,
    util::{normalize_key, normalize_required_name, on_unique_violation, validate_item},
};

use super::{
    ItemUpdate, Store,
    totals::{bounded_total, stored_total},
    with_tx, with_write_tx,
};

impl Store {
    /// Add a new item.
    ///
    /// The name is trimmed and must not be empty. Fails with
    /// [`StoreError::ExistingKey`] if an item with the same name exists, in
    /// which case nothing is written. An item that would push the inventory
    /// total past i64 cents is rejected with [`StoreError::InvalidInput`].
    pub async fn add(&self, name: &str, quantity: i64, unit_price: Money) -> ResultStore<()> {
        let name = normalize_required_name(name)?;
        let new_item = Item::new(name, quantity, unit_price);
        validate_item(&new_item)?;

        with_write_tx!(self, |db_tx| {
            let exists = item::Entity::find_by_id(new_item.name.clone())
                .one(&db_tx)
                .await?
                .is_some();
            if exists {
                return Err(StoreError::ExistingKey(new_item.name));
            }
            bounded_total(
                stored_total(&db_tx).await?,
                Money::ZERO,
                new_item.total_value(),
            )?;

            item::ActiveModel::from(&new_item)
                .insert(&db_tx)
                .await
                .map_err(|err| {
                    on_unique_violation(err, || StoreError::ExistingKey(new_item.name.clone()))
                })?;

            tracing::info!(
                name = %new_item.name,
                quantity = new_item.quantity,
                unit_price = %new_item.unit_price,
                "item added"
            );
            Ok(())
        })
    }

    /// Return every item, ordered by name.
    pub async fn list(&self) -> ResultStore<Vec<Item>> {
        with_tx!(self, |db_tx| {
            let models = item::Entity::find()
                .order_by_asc(item::Column::Name)
                .all(&db_tx)
                .await?;
            tracing::debug!(count = models.len(), "items listed");
            Ok(models.into_iter().map(Item::from).collect())
        })
    }

    /// Return a single item by name.
    pub async fn item(&self, name: &str) -> ResultStore<Item> {
        let key = normalize_key(name);
        with_tx!(self, |db_tx| {
            let model = item::Entity::find_by_id(key.clone())
                .one(&db_tx)
                .await?
                .ok_or_else(|| StoreError::KeyNotFound(key.clone()))?;
            Ok(Item::from(model))
        })
    }

    /// Update an existing item.
    ///
    /// Fields left as `None` in `update` keep their stored value. A new name
    /// renames the item; renaming onto another existing item fails with
    /// [`StoreError::Conflict`] and leaves both untouched. A missing item is
    /// reported as [`StoreError::KeyNotFound`] before the changes are checked.
    pub async fn update(&self, name: &str, update: ItemUpdate) -> ResultStore<()> {
        let key = normalize_key(name);

        with_write_tx!(self, |db_tx| {
            let current = item::Entity::find_by_id(key.clone())
                .one(&db_tx)
                .await?
                .map(Item::from)
                .ok_or_else(|| StoreError::KeyNotFound(key.clone()))?;

            let new_name = update
                .name
                .as_deref()
                .map(normalize_required_name)
                .transpose()?;

            let merged = Item {
                name: new_name.unwrap_or_else(|| current.name.clone()),
                quantity: update.quantity.unwrap_or(current.quantity),
                unit_price: update.unit_price.unwrap_or(current.unit_price),
            };
            validate_item(&merged)?;
            bounded_total(
                stored_total(&db_tx).await?,
                current.total_value(),
                merged.total_value(),
            )?;

            let conflict = || {
                StoreError::Conflict(format!(
                    "cannot rename \"{}\" to \"{}\": name already in use",
                    current.name, merged.name
                ))
            };

            if merged.name != current.name {
                let taken = item::Entity::find_by_id(merged.name.clone())
                    .one(&db_tx)
                    .await?
                    .is_some();
                if taken {
                    return Err(conflict());
                }
            }

            let result = item::Entity::update_many()
                .col_expr(item::Column::Name, Expr::value(merged.name.clone()))
                .col_expr(item::Column::Quantity, Expr::value(merged.quantity))
                .col_expr(
                    item::Column::UnitPrice,
                    Expr::value(merged.unit_price.cents()),
                )
                .filter(item::Column::Name.eq(current.name.clone()))
                .exec(&db_tx)
                .await
                .map_err(|err| on_unique_violation(err, conflict))?;
            if result.rows_affected == 0 {
                return Err(StoreError::KeyNotFound(key));
            }

            tracing::info!(
                from = %current.name,
                name = %merged.name,
                quantity = merged.quantity,
                unit_price = %merged.unit_price,
                "item updated"
            );
            Ok(())
        })
    }

    /// Remove an item by name.
    ///
    /// Fails with [`StoreError::KeyNotFound`] if no row was deleted.
    pub async fn remove(&self, name: &str) -> ResultStore<()> {
        let key = normalize_key(name);
        with_write_tx!(self, |db_tx| {
            let result = item::Entity::delete_by_id(key.clone())
                .exec(&db_tx)
                .await?;
            if result.rows_affected == 0 {
                return Err(StoreError::KeyNotFound(key));
            }
            tracing::info!(name = %key, "item removed");
            Ok(())
        })
    }
}
