//! Route definitions for Chat domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{conversations, messages, system, users};
use super::middleware::ChatState;

/// Create system routes
fn system_routes() -> Router<ChatState> {
    Router::new().route("/test", get(system::diagnostics))
}

/// Create user routes
fn user_routes() -> Router<ChatState> {
    Router::new().route("/api/users", post(users::create_user))
}

/// Create conversation routes
fn conversation_routes() -> Router<ChatState> {
    Router::new()
        .route("/api/bootstrap", post(conversations::bootstrap))
        .route("/api/conversations", get(conversations::list_conversations))
}

/// Create message routes
fn message_routes() -> Router<ChatState> {
    Router::new()
        .route("/api/messages", post(messages::send_message))
        .route(
            "/api/messages/{conversation_id}",
            get(messages::list_messages),
        )
}

/// Create all Chat domain API routes
pub fn routes() -> Router<ChatState> {
    Router::new()
        .merge(system_routes())
        .merge(user_routes())
        .merge(conversation_routes())
        .merge(message_routes())
}
