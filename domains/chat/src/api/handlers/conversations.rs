//! Conversation API handlers

use axum::{extract::State, Json};
use chatline_common::Result;
use serde::Serialize;

use crate::api::middleware::ChatState;
use crate::domain::entities::{Conversation, ConversationRecord, DEFAULT_CONVERSATION_TITLE};

/// Response for bootstrap
#[derive(Debug, Serialize)]
pub struct BootstrapResponse {
    pub status: &'static str,
}

/// Conversation response DTO
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub id: String,
    pub title: String,
    pub members: Option<Vec<String>>,
}

impl From<ConversationRecord> for ConversationResponse {
    fn from(c: ConversationRecord) -> Self {
        Self {
            id: c.id.to_hex(),
            title: c.title,
            members: c.members,
        }
    }
}

/// Ensure the public "General" room exists
pub async fn bootstrap(State(state): State<ChatState>) -> Result<Json<BootstrapResponse>> {
    let repos = state.repos()?;

    match repos
        .conversations
        .find_by_title(DEFAULT_CONVERSATION_TITLE)
        .await?
    {
        Some(existing) => {
            tracing::debug!(conversation_id = %existing.id, "Default conversation already exists");
        }
        None => {
            let id = repos
                .conversations
                .create(&Conversation::public(DEFAULT_CONVERSATION_TITLE))
                .await?;
            tracing::info!(conversation_id = %id, "Default conversation created");
        }
    }

    Ok(Json(BootstrapResponse { status: "ok" }))
}

/// List all conversations
pub async fn list_conversations(
    State(state): State<ChatState>,
) -> Result<Json<Vec<ConversationResponse>>> {
    let repos = state.repos()?;

    let conversations = repos.conversations.list().await?;
    tracing::debug!(count = conversations.len(), "Listed conversations");

    Ok(Json(
        conversations
            .into_iter()
            .map(ConversationResponse::from)
            .collect(),
    ))
}
