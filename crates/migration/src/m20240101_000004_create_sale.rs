//! Create `sale` table with FKs to `vehicle` and `customer`.
//!
//! Deleting a referenced vehicle or customer is restricted by the store.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sale::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sale::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(integer(Sale::VehicleId))
                    .col(integer(Sale::CustomerId))
                    .col(date(Sale::Date))
                    .col(decimal_len(Sale::Amount, 10, 2))
                    .col(string_len(Sale::Status, 32))
                    .col(timestamp_with_time_zone(Sale::CreatedAt))
                    .col(timestamp_with_time_zone(Sale::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_vehicle")
                            .from(Sale::Table, Sale::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_customer")
                            .from(Sale::Table, Sale::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Sale::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Sale { Table, Id, VehicleId, CustomerId, Date, Amount, Status, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Vehicle { Table, Id }

#[derive(DeriveIden)]
enum Customer { Table, Id }
