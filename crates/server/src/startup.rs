use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig, LoggingConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use common::utils::logging::{init_logging_default, init_logging_file, init_logging_json};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Pick the subscriber: daily file when a directory is configured, else
/// JSON or compact stdout (`LOG_FORMAT=json` also selects JSON).
pub async fn init_logging(cfg: &LoggingConfig) -> Result<(), StartupError> {
    if let Some(dir) = cfg.directory.as_deref() {
        common::env::ensure_dir(dir).await?;
        init_logging_file(dir).map_err(|e| StartupError::Runtime(format!("log file in {dir}: {e}")))?;
        return Ok(());
    }
    let env_json = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json");
    if cfg.json || env_json {
        init_logging_json();
    } else {
        init_logging_default();
    }
    Ok(())
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Connect the pool and, when enabled, bring the schema up to date.
pub async fn prepare_database(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(cfg).await?;
    if cfg.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("schema up to date");
    }
    Ok(db)
}

pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(AppState::new(db), build_cors())
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr = bind_addr(&cfg)?;
    let db = prepare_database(&cfg.database).await?;
    let app = build_app(db);

    info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
