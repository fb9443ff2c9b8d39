use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::DatabaseConfig;
use serde_json::{json, Value};
use tower::Service;

use server::startup::{build_app, prepare_database};

async fn build_test_app() -> anyhow::Result<Router> {
    let db = prepare_database(&DatabaseConfig::in_memory()).await?;
    let app = build_app(db);

    let req = Request::builder()
        .method("POST")
        .uri("/api/usuarios")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&json!({
            "email": "vendedor@loja.com", "nome": "Paulo", "senha": "S3curePass!",
            "tipo": "Vendedor", "status": "Ativo"
        }))?))?;
    let resp = app.clone().call(req).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    Ok(app)
}

async fn login(app: &Router, body: Body) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder()
        .method("POST")
        .uri("/api/login")
        .header("content-type", "application/json")
        .body(body)?;
    let resp = app.clone().call(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

fn credentials(email: &str, senha: &str) -> Body {
    Body::from(json!({"email": email, "senha": senha}).to_string())
}

#[tokio::test]
async fn test_login_success() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_test_app().await?;

    let (status, body) = login(&app, credentials("vendedor@loja.com", "S3curePass!")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login realizado com sucesso.");
    assert_eq!(body["nome"], "Paulo");
    assert_eq!(body["tipo"], "Vendedor");
    assert!(body["id"].is_i64());
    Ok(())
}

#[tokio::test]
async fn test_login_wrong_password() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_test_app().await?;

    let (status, body) = login(&app, credentials("vendedor@loja.com", "wrong")).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Senha incorreta.");
    Ok(())
}

#[tokio::test]
async fn test_login_unknown_email() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_test_app().await?;

    let (status, body) = login(&app, credentials("ninguem@loja.com", "x")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Usuário não encontrado.");
    Ok(())
}

#[tokio::test]
async fn test_login_missing_fields() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = build_test_app().await?;

    for body in [
        Body::from(json!({"email": "vendedor@loja.com"}).to_string()),
        Body::from(json!({"senha": "S3curePass!"}).to_string()),
        Body::from(json!({"email": "   ", "senha": "S3curePass!"}).to_string()),
        Body::from("garbage"),
    ] {
        let (status, body) = login(&app, body).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Email e senha são obrigatórios.");
    }
    Ok(())
}
