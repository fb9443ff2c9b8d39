use models::{vehicle, Canonical, VehicleStatus, VehicleType};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, Select, Set};
use serde_json::{json, Value};

use super::number;
use crate::errors::ServiceError;
use crate::payload::Payload;
use crate::resource::{Labels, Resource};

pub struct Vehicles;

impl Resource for Vehicles {
    type Entity = vehicle::Entity;
    type Model = vehicle::Model;
    type ActiveModel = vehicle::ActiveModel;

    const LABELS: Labels = Labels { noun: "Veículo", plural: "veículos", feminine: false };
    const REQUIRED: &'static [&'static str] = &["placa", "marca", "modelo", "preco", "ano", "tipo", "status"];

    fn find_by_id(id: i32) -> Select<vehicle::Entity> {
        vehicle::Entity::find_by_id(id)
    }

    fn build(p: &Payload) -> Result<vehicle::ActiveModel, ServiceError> {
        let kind = p.choice::<VehicleType>("tipo")?.required()?;
        let status = p.choice::<VehicleStatus>("status")?.required()?;
        Ok(vehicle::ActiveModel {
            license_plate: Set(p.text("placa")?.required()?),
            make: Set(p.text("marca")?.required()?),
            model_name: Set(p.text("modelo")?.required()?),
            price: Set(p.decimal("preco")?.required()?),
            year: Set(p.int("ano")?.required()?),
            mileage: Set(p.decimal("km")?.optional().unwrap_or(Decimal::ZERO)),
            color: Set(p.text("cor")?.optional()),
            kind: Set(kind),
            status: Set(status),
            ..Default::default()
        })
    }

    fn apply(am: &mut vehicle::ActiveModel, p: &Payload) -> Result<(), ServiceError> {
        let kind = p.choice::<VehicleType>("tipo")?;
        let status = p.choice::<VehicleStatus>("status")?;
        let plate = p.text("placa")?;
        let make = p.text("marca")?;
        let model_name = p.text("modelo")?;
        let price = p.decimal("preco")?;
        let year = p.int("ano")?;
        let mileage = p.decimal("km")?;
        let color = p.text("cor")?;

        kind.set_required("tipo", &mut am.kind)?;
        status.set_required("status", &mut am.status)?;
        plate.set_required("placa", &mut am.license_plate)?;
        make.set_required("marca", &mut am.make)?;
        model_name.set_required("modelo", &mut am.model_name)?;
        price.set_required("preco", &mut am.price)?;
        year.set_required("ano", &mut am.year)?;
        mileage.set_required("km", &mut am.mileage)?;
        color.set_optional(&mut am.color);
        Ok(())
    }

    fn id(m: &vehicle::Model) -> i32 {
        m.id
    }

    fn search_fields(m: &vehicle::Model) -> Vec<Option<String>> {
        vec![Some(m.make.clone()), Some(m.model_name.clone())]
    }

    fn project(m: &vehicle::Model) -> Value {
        json!({
            "id": m.id,
            "marca": m.make,
            "modelo": m.model_name,
            "placa": m.license_plate,
            "preco": number(&m.price),
            "ano": m.year,
            "km": number(&m.mileage),
            "cor": m.color,
            "tipo": m.kind.canonical(),
            "status": m.status.canonical(),
        })
    }
}
