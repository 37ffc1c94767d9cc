// Server module - router assembly and the listen loop

use axum::Router;
use sea_orm::DatabaseConnection;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;

/// Build the application router with CORS and request tracing layers
pub fn build_router(db: DatabaseConnection) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::api_router(db)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind the listener and serve until the process is stopped
pub async fn serve(db: DatabaseConnection, port: u16) -> Result<(), std::io::Error> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = build_router(db);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await
}
