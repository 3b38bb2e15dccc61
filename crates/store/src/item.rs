//! The module contains `Item` struct and its database entity.

use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::Money;

/// An inventory item.
///
/// The `name` is the primary key: it is unique across the inventory and
/// compared case-sensitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Value of the stock held for this item: `quantity * unit_price`.
    ///
    /// Never persisted. Saturates instead of wrapping; the store refuses to
    /// write items whose total does not fit.
    #[must_use]
    pub fn total_value(&self) -> Money {
        Money::new(self.unit_price.cents().saturating_mul(self.quantity))
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Item", 4)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("quantity", &self.quantity)?;
        state.serialize_field("unit_price", &self.unit_price)?;
        state.serialize_field("total_value", &self.total_value())?;
        state.end()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Name")]
    pub name: String,
    #[sea_orm(column_name = "Quantity")]
    pub quantity: i64,
    /// Unit price in cents.
    #[sea_orm(column_name = "UnitPrice")]
    pub unit_price: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Item {
    fn from(value: Model) -> Self {
        Self {
            name: value.name,
            quantity: value.quantity,
            unit_price: Money::new(value.unit_price),
        }
    }
}

impl From<&Item> for ActiveModel {
    fn from(value: &Item) -> Self {
        Self {
            name: ActiveValue::Set(value.name.clone()),
            quantity: ActiveValue::Set(value.quantity),
            unit_price: ActiveValue::Set(value.unit_price.cents()),
        }
    }
}
