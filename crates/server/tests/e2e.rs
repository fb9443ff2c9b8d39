use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use configs::DatabaseConfig;
use serde_json::{json, Value};
use tower::Service;

use server::startup::{build_app, prepare_database};

async fn test_app() -> anyhow::Result<Router> {
    let db = prepare_database(&DatabaseConfig::in_memory()).await?;
    Ok(build_app(db))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.unwrap_or_else(Body::empty))?;
    let resp = app.clone().call(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

fn json_body(v: Value) -> Option<Body> {
    Some(Body::from(v.to_string()))
}

fn ana() -> Value {
    json!({"nome": "Ana Silva", "cpf": "12345678900", "telefone": "11999999999", "status": "Ativo"})
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = test_app().await?;
    let (status, body) = send(&app, Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn e2e_customer_lifecycle() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = test_app().await?;

    let (status, created) = send(&app, Method::POST, "/api/clientes", json_body(ana())).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Cliente adicionado com sucesso.");
    let id = created["id"].as_i64().expect("id");

    let (status, list) = send(&app, Method::GET, "/api/clientes?busca=ana", None).await?;
    assert_eq!(status, StatusCode::OK);
    let rows = list.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "Ativo");
    assert_eq!(rows[0]["saldo"], json!(0.0));

    let uri = format!("/api/clientes/{id}");
    let (status, updated) = send(&app, Method::PUT, &uri, json_body(json!({"status": "Bloqueado"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["message"], "Cliente atualizado com sucesso.");

    let (_, list) = send(&app, Method::GET, "/api/clientes", None).await?;
    assert_eq!(list[0]["status"], "Bloqueado");
    assert_eq!(list[0]["cpf"], "12345678900");
    assert_eq!(list[0]["nome"], "Ana Silva");

    let (status, deleted) = send(&app, Method::DELETE, &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Cliente deletado com sucesso.");

    let (_, list) = send(&app, Method::GET, "/api/clientes?busca=ana", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_vehicle_enums_are_normalized() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = test_app().await?;
    let body = json!({
        "placa": "ABC1D23", "marca": "Volvo", "modelo": "FH", "preco": 350000,
        "ano": 2020, "tipo": "Caminhao", "status": "Manutencao"
    });
    let (status, _) = send(&app, Method::POST, "/api/veiculos", json_body(body)).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (_, list) = send(&app, Method::GET, "/api/veiculos?busca=VOLVO", None).await?;
    assert_eq!(list[0]["tipo"], "Caminhao");
    assert_eq!(list[0]["status"], "Manutencao");
    assert_eq!(list[0]["placa"], "ABC1D23");
    Ok(())
}

#[tokio::test]
async fn e2e_validation_and_not_found() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = test_app().await?;

    let (status, body) = send(&app, Method::POST, "/api/clientes", json_body(json!([1, 2, 3]))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Campos obrigatórios ausentes.");

    let (status, _) = send(&app, Method::POST, "/api/clientes", Some(Body::from("not json"))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad = ana();
    bad["status"] = json!("Suspenso");
    let (status, body) = send(&app, Method::POST, "/api/clientes", json_body(bad)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Status inválido.");

    let (status, body) = send(&app, Method::PUT, "/api/clientes/999", json_body(json!({"nome": "X"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Cliente não encontrado.");

    let (status, body) = send(&app, Method::DELETE, "/api/vendas/999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Venda não encontrada.");
    Ok(())
}

#[tokio::test]
async fn e2e_storage_errors_are_generic_500s() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = test_app().await?;

    let (status, _) = send(&app, Method::POST, "/api/clientes", json_body(ana())).await?;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(&app, Method::POST, "/api/clientes", json_body(ana())).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Erro ao adicionar cliente no banco de dados.");

    let (_, list) = send(&app, Method::GET, "/api/clientes", None).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn e2e_sales_reference_vehicles_and_customers() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = test_app().await?;

    let (_, customer) = send(&app, Method::POST, "/api/clientes", json_body(ana())).await?;
    let vehicle_body = json!({
        "placa": "FIA7000", "marca": "Fiat", "modelo": "Uno", "preco": 35000,
        "ano": 2012, "tipo": "Carro", "status": "Disponivel"
    });
    let (_, vehicle) = send(&app, Method::POST, "/api/veiculos", json_body(vehicle_body)).await?;

    let sale = json!({
        "veiculo_id": vehicle["id"], "cliente_id": customer["id"],
        "valor": 34000.5, "status": "Concluída", "data": "2024-03-15"
    });
    let (status, created) = send(&app, Method::POST, "/api/vendas", json_body(sale)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Venda adicionada com sucesso.");

    let (_, list) = send(&app, Method::GET, "/api/vendas?busca=2024-03", None).await?;
    assert_eq!(list[0]["status"], "Concluida");
    assert_eq!(list[0]["valor"], json!(34000.5));
    assert_eq!(list[0]["veiculo_id"], vehicle["id"]);

    let uri = format!("/api/veiculos/{}", vehicle["id"]);
    let (status, body) = send(&app, Method::DELETE, &uri, None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Erro ao deletar veículo do banco de dados.");
    Ok(())
}

#[tokio::test]
async fn e2e_users_never_expose_password() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = test_app().await?;
    let body = json!({
        "email": "gerente@loja.com", "nome": "Carla", "senha": "segredo", "tipo": "gerente", "status": "ativo"
    });
    let (status, _) = send(&app, Method::POST, "/api/usuarios", json_body(body)).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (_, list) = send(&app, Method::GET, "/api/usuarios?busca=Gerente", None).await?;
    let user = &list[0];
    assert_eq!(user["tipo"], "Gerente");
    assert_eq!(user["status"], "Ativo");
    assert!(user.get("senha").is_none());
    assert!(user.get("password_hash").is_none());
    Ok(())
}
