//! Message API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chatline_common::{Error, LimitQuery, Result, ValidatedJson, ValidatedQuery};
use chatline_store::parse_identifier;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::middleware::ChatState;
use crate::domain::entities::{Message, MessageRecord, User};

/// Message response DTO
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub conversation_id: Option<String>,
    pub sender: Option<String>,
    pub text: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<MessageRecord> for MessageResponse {
    fn from(m: MessageRecord) -> Self {
        let created_at = m.created_at();
        Self {
            id: m.id.to_hex(),
            conversation_id: m.conversation_id,
            sender: m.sender,
            text: m.text,
            created_at,
        }
    }
}

/// Response for send message
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub id: String,
}

/// List the earliest messages of a conversation
pub async fn list_messages(
    State(state): State<ChatState>,
    Path(conversation_id): Path<String>,
    ValidatedQuery(query): ValidatedQuery<LimitQuery>,
) -> Result<Json<Vec<MessageResponse>>> {
    parse_identifier(&conversation_id, "conversation")?;
    let repos = state.repos()?;

    let messages = repos
        .messages
        .list_by_conversation(&conversation_id, query.limit)
        .await?;
    tracing::debug!(
        conversation_id = %conversation_id,
        count = messages.len(),
        "Listed messages"
    );

    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// Post a message, registering the sender on first use
pub async fn send_message(
    State(state): State<ChatState>,
    ValidatedJson(message): ValidatedJson<Message>,
) -> Result<Json<SendMessageResponse>> {
    let conversation_oid = parse_identifier(&message.conversation_id, "conversation")?;
    let repos = state.repos()?;

    repos
        .conversations
        .find(conversation_oid)
        .await?
        .ok_or_else(|| Error::NotFound("Conversation not found".to_string()))?;

    if repos
        .users
        .find_by_username(&message.sender)
        .await?
        .is_none()
    {
        let user = User {
            username: message.sender.clone(),
            avatar: None,
        };
        let user_id = repos.users.create(&user).await?;
        tracing::info!(user_id = %user_id, username = %user.username, "Sender registered");
    }

    let id = repos.messages.create(&message).await?;
    tracing::info!(
        message_id = %id,
        conversation_id = %message.conversation_id,
        sender = %message.sender,
        "Message sent"
    );

    Ok(Json(SendMessageResponse { id }))
}
