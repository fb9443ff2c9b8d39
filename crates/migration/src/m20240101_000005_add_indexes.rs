use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_customer_name")
                    .table(Customer::Table)
                    .col(Customer::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_make_model")
                    .table(Vehicle::Table)
                    .col(Vehicle::Make)
                    .col(Vehicle::Model)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_status")
                    .table(Vehicle::Table)
                    .col(Vehicle::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sale_vehicle")
                    .table(Sale::Table)
                    .col(Sale::VehicleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sale_customer")
                    .table(Sale::Table)
                    .col(Sale::CustomerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_sale_customer").table(Sale::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_sale_vehicle").table(Sale::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_vehicle_status").table(Vehicle::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_vehicle_make_model").table(Vehicle::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_customer_name").table(Customer::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Customer { Table, Name }

#[derive(DeriveIden)]
enum Vehicle { Table, Make, Model, Status }

#[derive(DeriveIden)]
enum Sale { Table, VehicleId, CustomerId }
