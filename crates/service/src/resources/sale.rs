use chrono::Local;
use models::{sale, Canonical, SaleStatus};
use sea_orm::{EntityTrait, Select, Set};
use serde_json::{json, Value};

use super::number;
use crate::errors::ServiceError;
use crate::payload::Payload;
use crate::resource::{Labels, Resource};

pub struct Sales;

const DATE_FORMAT: &str = "%Y-%m-%d";

impl Resource for Sales {
    type Entity = sale::Entity;
    type Model = sale::Model;
    type ActiveModel = sale::ActiveModel;

    const LABELS: Labels = Labels { noun: "Venda", plural: "vendas", feminine: true };
    const REQUIRED: &'static [&'static str] = &["veiculo_id", "cliente_id", "valor", "status"];

    fn find_by_id(id: i32) -> Select<sale::Entity> {
        sale::Entity::find_by_id(id)
    }

    /// The referenced vehicle and customer are checked by the schema, not here.
    fn build(p: &Payload) -> Result<sale::ActiveModel, ServiceError> {
        let status = p.choice::<SaleStatus>("status")?.required()?;
        Ok(sale::ActiveModel {
            vehicle_id: Set(p.int("veiculo_id")?.required()?),
            customer_id: Set(p.int("cliente_id")?.required()?),
            date: Set(p.date("data")?.optional().unwrap_or_else(|| Local::now().date_naive())),
            amount: Set(p.decimal("valor")?.required()?),
            status: Set(status),
            ..Default::default()
        })
    }

    fn apply(am: &mut sale::ActiveModel, p: &Payload) -> Result<(), ServiceError> {
        let status = p.choice::<SaleStatus>("status")?;
        let vehicle_id = p.int("veiculo_id")?;
        let customer_id = p.int("cliente_id")?;
        let date = p.date("data")?;
        let amount = p.decimal("valor")?;

        status.set_required("status", &mut am.status)?;
        vehicle_id.set_required("veiculo_id", &mut am.vehicle_id)?;
        customer_id.set_required("cliente_id", &mut am.customer_id)?;
        date.set_required("data", &mut am.date)?;
        amount.set_required("valor", &mut am.amount)?;
        Ok(())
    }

    fn id(m: &sale::Model) -> i32 {
        m.id
    }

    fn search_fields(m: &sale::Model) -> Vec<Option<String>> {
        vec![Some(m.status.canonical()), Some(m.date.format(DATE_FORMAT).to_string())]
    }

    fn project(m: &sale::Model) -> Value {
        json!({
            "id": m.id,
            "veiculo_id": m.vehicle_id,
            "cliente_id": m.customer_id,
            "data": m.date.format(DATE_FORMAT).to_string(),
            "valor": number(&m.amount),
            "status": m.status.canonical(),
        })
    }
}
