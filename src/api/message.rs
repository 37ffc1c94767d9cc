use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::services::message_service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessageRequest {
    posted_by: i32,
    message_text: String,
    time_posted_epoch: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchMessageRequest {
    message_text: String,
}

// POST /messages
pub async fn create_message(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<NewMessageRequest>,
) -> impl IntoResponse {
    match message_service::add_message(
        &db,
        payload.posted_by,
        &payload.message_text,
        payload.time_posted_epoch,
    )
    .await
    {
        Ok(message) => Json(message).into_response(),
        Err(e) => super::error_response(e),
    }
}

// GET /messages
pub async fn list_messages(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    match message_service::get_all_messages(&db).await {
        Ok(messages) => Json(messages).into_response(),
        Err(e) => super::error_response(e),
    }
}

// GET /messages/:message_id
// 200 either way; the body is empty when there is no such message.
pub async fn get_message(
    State(db): State<DatabaseConnection>,
    Path(message_id): Path<i32>,
) -> impl IntoResponse {
    match message_service::get_message(&db, message_id).await {
        Ok(Some(message)) => Json(message).into_response(),
        Ok(None) => StatusCode::OK.into_response(),
        Err(e) => super::error_response(e),
    }
}

// DELETE /messages/:message_id
// Body carries the rows-affected count, or nothing when no row matched.
pub async fn delete_message(
    State(db): State<DatabaseConnection>,
    Path(message_id): Path<i32>,
) -> impl IntoResponse {
    match message_service::delete_message(&db, message_id).await {
        Ok(rows) if rows > 0 => Json(rows).into_response(),
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => super::error_response(e),
    }
}

// PATCH /messages/:message_id
pub async fn update_message_text(
    State(db): State<DatabaseConnection>,
    Path(message_id): Path<i32>,
    Json(payload): Json<PatchMessageRequest>,
) -> impl IntoResponse {
    match message_service::update_message_text(&db, &payload.message_text, message_id).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => super::error_response(e),
    }
}

// GET /accounts/:account_id/messages
pub async fn list_messages_by_account(
    State(db): State<DatabaseConnection>,
    Path(account_id): Path<i32>,
) -> impl IntoResponse {
    match message_service::get_all_messages_by_account(&db, account_id).await {
        Ok(messages) => Json(messages).into_response(),
        Err(e) => super::error_response(e),
    }
}
