pub mod account;
pub mod health;
pub mod message;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use sea_orm::DatabaseConnection;

use crate::services::ServiceError;

pub fn api_router(db: DatabaseConnection) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Accounts
        .route("/register", post(account::register))
        .route("/login", post(account::login))
        .route("/accounts/:account_id/messages", get(message::list_messages_by_account))
        // Messages
        .route("/messages", get(message::list_messages).post(message::create_message))
        .route(
            "/messages/:message_id",
            get(message::get_message)
                .delete(message::delete_message)
                .patch(message::update_message_text),
        )
        .with_state(db)
}

/// Map a service error to its status code, with the error text as a
/// plain-text body.
pub(crate) fn error_response(err: ServiceError) -> Response {
    let status = match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string()).into_response()
}
