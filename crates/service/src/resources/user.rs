use models::{user, Canonical, UserRole, UserStatus};
use sea_orm::{EntityTrait, Select, Set};
use serde_json::{json, Value};

use crate::auth::password::hash_password;
use crate::errors::ServiceError;
use crate::payload::{invalid_value, Field, Payload};
use crate::resource::{Labels, Resource};

pub struct Users;

fn hashed(password: Field<String>) -> Result<Field<String>, ServiceError> {
    match password {
        Field::Value(plain) if plain.is_empty() => Err(invalid_value("senha")),
        Field::Value(plain) => hash_password(&plain)
            .map(Field::Value)
            .map_err(|e| ServiceError::Hash(e.to_string())),
        other => Ok(other),
    }
}

impl Resource for Users {
    type Entity = user::Entity;
    type Model = user::Model;
    type ActiveModel = user::ActiveModel;

    const LABELS: Labels = Labels { noun: "Usuário", plural: "usuários", feminine: false };
    const REQUIRED: &'static [&'static str] = &["email", "nome", "senha", "tipo", "status"];

    fn find_by_id(id: i32) -> Select<user::Entity> {
        user::Entity::find_by_id(id)
    }

    fn build(p: &Payload) -> Result<user::ActiveModel, ServiceError> {
        let role = p.choice::<UserRole>("tipo")?.required()?;
        let status = p.choice::<UserStatus>("status")?.required()?;
        let email = p.text("email")?.required()?;
        let name = p.text("nome")?.required()?;
        let password_hash = hashed(p.text("senha")?)?.required()?;
        Ok(user::ActiveModel {
            email: Set(email),
            name: Set(name),
            password_hash: Set(password_hash),
            role: Set(role),
            status: Set(status),
            ..Default::default()
        })
    }

    fn apply(am: &mut user::ActiveModel, p: &Payload) -> Result<(), ServiceError> {
        let role = p.choice::<UserRole>("tipo")?;
        let status = p.choice::<UserStatus>("status")?;
        let email = p.text("email")?;
        let name = p.text("nome")?;
        let password_hash = hashed(p.text("senha")?)?;

        role.set_required("tipo", &mut am.role)?;
        status.set_required("status", &mut am.status)?;
        email.set_required("email", &mut am.email)?;
        name.set_required("nome", &mut am.name)?;
        password_hash.set_required("senha", &mut am.password_hash)?;
        Ok(())
    }

    fn id(m: &user::Model) -> i32 {
        m.id
    }

    fn search_fields(m: &user::Model) -> Vec<Option<String>> {
        vec![Some(m.name.clone()), Some(m.email.clone()), Some(m.role.canonical())]
    }

    /// The password hash never leaves the service.
    fn project(m: &user::Model) -> Value {
        json!({
            "id": m.id,
            "email": m.email,
            "nome": m.name,
            "tipo": m.role.canonical(),
            "status": m.status.canonical(),
            "created_at": m.created_at.to_rfc3339(),
        })
    }
}
