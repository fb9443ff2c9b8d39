//! Create `customer` table.
//!
//! `national_id` is unique; status is stored as its canonical text.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customer::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Customer::Name, 100))
                    .col(string_len(Customer::NationalId, 20).unique_key())
                    .col(string_len(Customer::Phone, 20))
                    .col(string_len_null(Customer::Email, 100))
                    .col(string_len_null(Customer::PostalCode, 10))
                    .col(string_len_null(Customer::Address, 150))
                    .col(string_len_null(Customer::City, 50))
                    .col(string_len_null(Customer::State, 2))
                    .col(decimal_len(Customer::Balance, 10, 2))
                    .col(string_len(Customer::Status, 32))
                    .col(timestamp_with_time_zone(Customer::CreatedAt))
                    .col(timestamp_with_time_zone(Customer::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer {
    Table,
    Id,
    Name,
    NationalId,
    Phone,
    Email,
    PostalCode,
    Address,
    City,
    State,
    Balance,
    Status,
    CreatedAt,
    UpdatedAt,
}
