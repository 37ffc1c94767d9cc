use axum::{Json, extract::State, response::IntoResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::services::account_service;

#[derive(Debug, Deserialize)]
pub struct AccountRequest {
    username: String,
    password: String,
}

// POST /register
pub async fn register(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<AccountRequest>,
) -> impl IntoResponse {
    match account_service::register_account(&db, &payload.username, &payload.password).await {
        Ok(account) => Json(account).into_response(),
        Err(e) => super::error_response(e),
    }
}

// POST /login
pub async fn login(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<AccountRequest>,
) -> impl IntoResponse {
    tracing::info!("Login attempt for user: {}", payload.username);

    match account_service::verify_login(&db, &payload.username, &payload.password).await {
        Ok(account) => Json(account).into_response(),
        Err(e) => super::error_response(e),
    }
}
