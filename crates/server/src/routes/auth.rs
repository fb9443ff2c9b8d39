use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;

use service::auth::domain::LoginInput;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LoginOutput {
    pub message: &'static str,
    pub id: i32,
    pub nome: String,
    pub tipo: String,
}

/// `POST /api/login` with `{"email", "senha"}`. No session is created.
pub async fn login(State(state): State<AppState>, body: Bytes) -> Result<Json<LoginOutput>, ApiError> {
    let input: LoginInput = serde_json::from_slice(&body).unwrap_or_default();
    let user = state.login.login(input).await?;
    Ok(Json(LoginOutput {
        message: "Login realizado com sucesso.",
        id: user.id,
        nome: user.name,
        tipo: user.role,
    }))
}
