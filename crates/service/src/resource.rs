//! Generic create/update/delete/list workflow shared by every resource.
//!
//! A [`Resource`] describes one entity: how a payload becomes a record, how a
//! partial payload is applied, which text fields are searchable and how a
//! record is projected for the wire. [`ResourceService`] runs the workflow,
//! one transaction per mutating call.

use std::marker::PhantomData;

use common::types::Message;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    FromQueryResult, IntoActiveModel, ModelTrait, Select, TransactionTrait,
};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::payload::{Payload, MISSING_FIELDS};

/// Operation names used in logs and failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    List,
}

/// Wire wording for one resource.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub noun: &'static str,
    pub plural: &'static str,
    pub feminine: bool,
}

impl Labels {
    fn ending(&self) -> &'static str {
        if self.feminine { "a" } else { "o" }
    }

    pub fn created(&self) -> String {
        format!("{} adicionad{} com sucesso.", self.noun, self.ending())
    }

    pub fn updated(&self) -> String {
        format!("{} atualizad{} com sucesso.", self.noun, self.ending())
    }

    pub fn deleted(&self) -> String {
        format!("{} deletad{} com sucesso.", self.noun, self.ending())
    }

    pub fn not_found(&self) -> String {
        format!("{} não encontrad{}.", self.noun, self.ending())
    }

    /// Generic client message for a storage failure; details only go to the log.
    pub fn failure(&self, op: Operation) -> String {
        let noun = self.noun.to_lowercase();
        match op {
            Operation::Create => format!("Erro ao adicionar {noun} no banco de dados."),
            Operation::Update => format!("Erro ao atualizar {noun} no banco de dados."),
            Operation::Delete => format!("Erro ao deletar {noun} do banco de dados."),
            Operation::List => format!("Erro ao listar {}.", self.plural),
        }
    }
}

pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync + 'static;

    const LABELS: Labels;
    /// Keys that must be present and non-falsy on create.
    const REQUIRED: &'static [&'static str];

    fn find_by_id(id: i32) -> Select<Self::Entity>;

    /// Build a new record. Required keys are already known to be filled.
    fn build(payload: &Payload) -> Result<Self::ActiveModel, ServiceError>;

    /// Apply the keys present in `payload`. Nothing is written unless every
    /// key is valid.
    fn apply(record: &mut Self::ActiveModel, payload: &Payload) -> Result<(), ServiceError>;

    fn id(model: &Self::Model) -> i32;

    /// Text matched against the search term. `None` never matches a non-empty term.
    fn search_fields(model: &Self::Model) -> Vec<Option<String>>;

    fn project(model: &Self::Model) -> Value;
}

/// Commit on success, roll back on failure. A failed rollback is logged and
/// the original error wins.
async fn finish<T>(txn: DatabaseTransaction, outcome: Result<T, ServiceError>) -> Result<T, ServiceError> {
    match outcome {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rb) = txn.rollback().await {
                warn!(error = %rb, "rollback failed");
            }
            Err(err)
        }
    }
}

pub struct ResourceService<R: Resource> {
    db: DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _resource: PhantomData }
    }

    #[instrument(skip(self, payload), fields(resource = R::LABELS.noun))]
    pub async fn create(&self, payload: &Payload) -> Result<Message, ServiceError> {
        if !payload.has_all(R::REQUIRED) {
            return Err(ServiceError::Validation(MISSING_FIELDS.into()));
        }
        let record = R::build(payload)?;

        let txn = self.db.begin().await?;
        let outcome = record.insert(&txn).await.map_err(ServiceError::from);
        let created = finish(txn, outcome).await?;

        let id = R::id(&created);
        info!(id, "record created");
        Ok(Message::with_id(R::LABELS.created(), id))
    }

    #[instrument(skip(self, payload), fields(resource = R::LABELS.noun))]
    pub async fn update(&self, id: i32, payload: &Payload) -> Result<Message, ServiceError> {
        let txn = self.db.begin().await?;
        let outcome = async {
            let found = R::find_by_id(id)
                .one(&txn)
                .await?
                .ok_or_else(|| ServiceError::NotFound(R::LABELS.not_found()))?;
            let mut record = found.into_active_model();
            R::apply(&mut record, payload)?;
            record.update(&txn).await.map_err(ServiceError::from)
        }
        .await;
        finish(txn, outcome).await?;

        info!(id, "record updated");
        Ok(Message::with_id(R::LABELS.updated(), id))
    }

    #[instrument(skip(self), fields(resource = R::LABELS.noun))]
    pub async fn delete(&self, id: i32) -> Result<Message, ServiceError> {
        let txn = self.db.begin().await?;
        let outcome = async {
            let found = R::find_by_id(id)
                .one(&txn)
                .await?
                .ok_or_else(|| ServiceError::NotFound(R::LABELS.not_found()))?;
            found.into_active_model().delete(&txn).await.map_err(ServiceError::from)
        }
        .await;
        finish(txn, outcome).await?;

        info!(id, "record deleted");
        Ok(Message::with_id(R::LABELS.deleted(), id))
    }

    /// Every record whose searchable text contains `term`, case-insensitively.
    #[instrument(skip(self), fields(resource = R::LABELS.noun))]
    pub async fn list(&self, term: &str) -> Result<Vec<Value>, ServiceError> {
        let term = term.to_lowercase();
        let records = R::Entity::find().all(&self.db).await?;
        Ok(records
            .iter()
            .filter(|m| matches_term(&R::search_fields(m), &term))
            .map(R::project)
            .collect())
    }
}

fn matches_term(fields: &[Option<String>], term: &str) -> bool {
    term.is_empty()
        || fields
            .iter()
            .flatten()
            .any(|f| f.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOMER: Labels = Labels { noun: "Cliente", plural: "clientes", feminine: false };
    const SALE: Labels = Labels { noun: "Venda", plural: "vendas", feminine: true };

    #[test]
    fn labels_agree_in_gender() {
        assert_eq!(CUSTOMER.created(), "Cliente adicionado com sucesso.");
        assert_eq!(SALE.created(), "Venda adicionada com sucesso.");
        assert_eq!(SALE.not_found(), "Venda não encontrada.");
        assert_eq!(CUSTOMER.deleted(), "Cliente deletado com sucesso.");
    }

    #[test]
    fn failure_messages_name_the_operation() {
        let vehicle = Labels { noun: "Veículo", plural: "veículos", feminine: false };
        assert_eq!(vehicle.failure(Operation::Create), "Erro ao adicionar veículo no banco de dados.");
        assert_eq!(vehicle.failure(Operation::Delete), "Erro ao deletar veículo do banco de dados.");
        assert_eq!(vehicle.failure(Operation::List), "Erro ao listar veículos.");
    }

    #[test]
    fn term_matching() {
        let fields = vec![Some("Ana Silva".to_string()), Some("123".to_string()), None];
        assert!(matches_term(&fields, ""));
        assert!(matches_term(&fields, "ana"));
        assert!(matches_term(&fields, "12"));
        assert!(!matches_term(&fields, "bruno"));
        assert!(matches_term(&[None], ""));
        assert!(!matches_term(&[None], "a"));
    }
}
