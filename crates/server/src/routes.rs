use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::resources::{Customers, Sales, Users, Vehicles};
use service::Resource;

use crate::state::AppState;

pub mod auth;
pub mod resources;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Collection and item routes for one resource under `path`.
fn resource_routes<R: Resource>(path: &str) -> Router<AppState> {
    Router::new()
        .route(path, get(resources::list::<R>).post(resources::create::<R>))
        .route(
            &format!("{path}/:id"),
            put(resources::update::<R>).delete(resources::delete::<R>),
        )
}

/// Build the full application router: health, login and the four resources
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/login", post(auth::login))
        .merge(resource_routes::<Customers>("/api/clientes"))
        .merge(resource_routes::<Vehicles>("/api/veiculos"))
        .merge(resource_routes::<Users>("/api/usuarios"))
        .merge(resource_routes::<Sales>("/api/vendas"));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
