//! Diagnostics handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::middleware::ChatState;

const BACKEND_RUNNING: &str = "✅ Running";
const DATABASE_CONNECTED: &str = "✅ Connected";
const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: &'static str,
}

/// Report whether the backend is up and the document store is connected
pub async fn diagnostics(State(state): State<ChatState>) -> Json<DiagnosticsResponse> {
    let database = if state.database_connected() {
        DATABASE_CONNECTED
    } else {
        DATABASE_NOT_AVAILABLE
    };

    Json(DiagnosticsResponse {
        backend: BACKEND_RUNNING,
        database,
    })
}
