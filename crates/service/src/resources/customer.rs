use models::{customer, Canonical, CustomerStatus};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, Select, Set};
use serde_json::{json, Value};

use super::number;
use crate::errors::ServiceError;
use crate::payload::Payload;
use crate::resource::{Labels, Resource};

pub struct Customers;

impl Resource for Customers {
    type Entity = customer::Entity;
    type Model = customer::Model;
    type ActiveModel = customer::ActiveModel;

    const LABELS: Labels = Labels { noun: "Cliente", plural: "clientes", feminine: false };
    const REQUIRED: &'static [&'static str] = &["nome", "cpf", "telefone", "status"];

    fn find_by_id(id: i32) -> Select<customer::Entity> {
        customer::Entity::find_by_id(id)
    }

    fn build(p: &Payload) -> Result<customer::ActiveModel, ServiceError> {
        let status = p.choice::<CustomerStatus>("status")?.required()?;
        Ok(customer::ActiveModel {
            name: Set(p.text("nome")?.required()?),
            national_id: Set(p.text("cpf")?.required()?),
            phone: Set(p.text("telefone")?.required()?),
            email: Set(p.text("email")?.optional()),
            postal_code: Set(p.text("cep")?.optional()),
            address: Set(p.text("endereco")?.optional()),
            city: Set(p.text("cidade")?.optional()),
            state: Set(p.text("uf")?.optional()),
            balance: Set(p.decimal("saldo")?.optional().unwrap_or(Decimal::ZERO)),
            status: Set(status),
            ..Default::default()
        })
    }

    fn apply(am: &mut customer::ActiveModel, p: &Payload) -> Result<(), ServiceError> {
        let status = p.choice::<CustomerStatus>("status")?;
        let name = p.text("nome")?;
        let national_id = p.text("cpf")?;
        let phone = p.text("telefone")?;
        let email = p.text("email")?;
        let postal_code = p.text("cep")?;
        let address = p.text("endereco")?;
        let city = p.text("cidade")?;
        let state = p.text("uf")?;
        let balance = p.decimal("saldo")?;

        status.set_required("status", &mut am.status)?;
        name.set_required("nome", &mut am.name)?;
        national_id.set_required("cpf", &mut am.national_id)?;
        phone.set_required("telefone", &mut am.phone)?;
        balance.set_required("saldo", &mut am.balance)?;
        email.set_optional(&mut am.email);
        postal_code.set_optional(&mut am.postal_code);
        address.set_optional(&mut am.address);
        city.set_optional(&mut am.city);
        state.set_optional(&mut am.state);
        Ok(())
    }

    fn id(m: &customer::Model) -> i32 {
        m.id
    }

    fn search_fields(m: &customer::Model) -> Vec<Option<String>> {
        vec![Some(m.name.clone()), Some(m.national_id.clone()), m.email.clone()]
    }

    fn project(m: &customer::Model) -> Value {
        json!({
            "id": m.id,
            "nome": m.name,
            "cpf": m.national_id,
            "telefone": m.phone,
            "email": m.email,
            "cep": m.postal_code,
            "endereco": m.address,
            "cidade": m.city,
            "uf": m.state,
            "saldo": number(&m.balance),
            "status": m.status.canonical(),
        })
    }
}
