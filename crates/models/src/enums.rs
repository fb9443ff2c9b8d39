//! Closed enumerations persisted as their canonical text.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum CustomerStatus {
    #[default]
    #[sea_orm(string_value = "Ativo")]
    #[serde(rename = "Ativo")]
    Active,
    #[sea_orm(string_value = "Inativo")]
    #[serde(rename = "Inativo")]
    Inactive,
    #[sea_orm(string_value = "Bloqueado")]
    #[serde(rename = "Bloqueado")]
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum UserStatus {
    #[default]
    #[sea_orm(string_value = "Ativo")]
    #[serde(rename = "Ativo")]
    Active,
    #[sea_orm(string_value = "Inativo")]
    #[serde(rename = "Inativo")]
    Inactive,
    #[sea_orm(string_value = "Bloqueado")]
    #[serde(rename = "Bloqueado")]
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum VehicleType {
    #[sea_orm(string_value = "Moto")]
    #[serde(rename = "Moto")]
    Motorcycle,
    #[sea_orm(string_value = "Carro")]
    #[serde(rename = "Carro")]
    Car,
    #[sea_orm(string_value = "Caminhao")]
    #[serde(rename = "Caminhao")]
    Truck,
    #[default]
    #[sea_orm(string_value = "Indefinido")]
    #[serde(rename = "Indefinido")]
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum VehicleStatus {
    #[default]
    #[sea_orm(string_value = "Disponivel")]
    #[serde(rename = "Disponivel")]
    Available,
    #[sea_orm(string_value = "Indisponivel")]
    #[serde(rename = "Indisponivel")]
    Unavailable,
    #[sea_orm(string_value = "Vendido")]
    #[serde(rename = "Vendido")]
    Sold,
    #[sea_orm(string_value = "Manutencao")]
    #[serde(rename = "Manutencao")]
    InMaintenance,
    #[sea_orm(string_value = "Reservado")]
    #[serde(rename = "Reservado")]
    Reserved,
}

/// Staff role. No default: every user is created with an explicit role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum UserRole {
    #[sea_orm(string_value = "Comum")]
    #[serde(rename = "Comum")]
    Common,
    #[sea_orm(string_value = "Administrador")]
    #[serde(rename = "Administrador")]
    Admin,
    #[sea_orm(string_value = "Vendedor")]
    #[serde(rename = "Vendedor")]
    Salesperson,
    #[sea_orm(string_value = "Gerente")]
    #[serde(rename = "Gerente")]
    Manager,
    #[sea_orm(string_value = "Financeiro")]
    #[serde(rename = "Financeiro")]
    Finance,
    #[sea_orm(string_value = "Mecanico")]
    #[serde(rename = "Mecanico")]
    Mechanic,
    #[sea_orm(string_value = "Estoquista")]
    #[serde(rename = "Estoquista")]
    StockClerk,
    #[sea_orm(string_value = "Caixa")]
    #[serde(rename = "Caixa")]
    Cashier,
    #[sea_orm(string_value = "Atendente")]
    #[serde(rename = "Atendente")]
    Attendant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum SaleStatus {
    #[sea_orm(string_value = "Concluida")]
    #[serde(rename = "Concluida")]
    Completed,
    #[sea_orm(string_value = "Cancelada")]
    #[serde(rename = "Cancelada")]
    Cancelled,
}
