//! Handlers shared by every resource; `R` picks the entity.
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use common::types::Message;
use service::{Operation, Payload, Resource, ResourceService};

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub busca: String,
}

/// Anything that is not a JSON object is an empty payload.
fn payload(body: &Bytes) -> Payload {
    Payload::from_value(serde_json::from_slice(body).unwrap_or(Value::Null))
}

fn service<R: Resource>(state: &AppState) -> ResourceService<R> {
    ResourceService::new(state.db.clone())
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let created = service::<R>(&state)
        .create(&payload(&body))
        .await
        .map_err(|e| ApiError::from_service(e, R::LABELS, Operation::Create))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<Json<Message>, ApiError> {
    let updated = service::<R>(&state)
        .update(id, &payload(&body))
        .await
        .map_err(|e| ApiError::from_service(e, R::LABELS, Operation::Update))?;
    Ok(Json(updated))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Message>, ApiError> {
    let deleted = service::<R>(&state)
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(e, R::LABELS, Operation::Delete))?;
    Ok(Json(deleted))
}

pub async fn list<R: Resource>(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let records = service::<R>(&state)
        .list(&params.busca)
        .await
        .map_err(|e| ApiError::from_service(e, R::LABELS, Operation::List))?;
    Ok(Json(records))
}
