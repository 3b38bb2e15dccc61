//! Initial schema migration - creates the `Items` table.
//!
//! - `Name`: primary key, case-sensitive item name
//! - `Quantity`: units in stock
//! - `UnitPrice`: price of one unit in cents

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Items {
    #[iden = "Items"]
    Table,
    #[iden = "Name"]
    Name,
    #[iden = "Quantity"]
    Quantity,
    #[iden = "UnitPrice"]
    UnitPrice,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Items::Quantity).big_integer().not_null())
                    .col(ColumnDef::new(Items::UnitPrice).big_integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}
