//! Create `vehicle` table with a unique license plate.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicle::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Vehicle::LicensePlate, 10).unique_key())
                    .col(string_len(Vehicle::Make, 50))
                    .col(string_len(Vehicle::Model, 50))
                    .col(decimal_len(Vehicle::Price, 10, 2))
                    .col(integer(Vehicle::Year))
                    .col(decimal_len(Vehicle::Mileage, 10, 2))
                    .col(string_len_null(Vehicle::Color, 30))
                    .col(string_len(Vehicle::VehicleType, 32))
                    .col(string_len(Vehicle::Status, 32))
                    .col(timestamp_with_time_zone(Vehicle::CreatedAt))
                    .col(timestamp_with_time_zone(Vehicle::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vehicle {
    Table,
    Id,
    LicensePlate,
    Make,
    Model,
    Price,
    Year,
    Mileage,
    Color,
    VehicleType,
    Status,
    CreatedAt,
    UpdatedAt,
}
