//! Chatline application composition root
//!
//! Composes the chat domain router with the shared infrastructure routes.

use axum::{routing::get, Json, Router};
use chatline_chat::ChatState;
use chatline_store::StoreHandle;
use serde::Serialize;
use tower_http::cors::CorsLayer;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

/// Create the main application router with all routes and middleware
pub fn create_app(store: StoreHandle) -> Router {
    let chat_state = ChatState::new(store);

    Router::new()
        .route("/", get(health_check))
        .merge(chatline_chat::routes().with_state(chat_state))
        .layer(CorsLayer::permissive())
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Chat backend running",
    })
}
