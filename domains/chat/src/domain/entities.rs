//! Domain entities for the Chat domain
//!
//! The schema structs (`User`, `Conversation`, `Message`) describe what a
//! client sends and what gets written to the store; their `validator` rules are
//! the only field constraints the application enforces. The `*Record` structs
//! are the shapes read back from the store, including the generated `_id`.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use chatline_common::Result;

/// Title of the public room created by bootstrap
pub const DEFAULT_CONVERSATION_TITLE: &str = "General";

/// Username length bounds, in characters
pub const MIN_USERNAME_LENGTH: usize = 2;
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Message text length bounds, in characters
pub const MIN_TEXT_LENGTH: usize = 1;
pub const MAX_TEXT_LENGTH: usize = 4000;

/// User schema (collection `user`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    /// Unique display name
    #[validate(length(min = 2, max = 32))]
    pub username: String,

    /// Avatar URL
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Create a new user
    pub fn new(username: impl Into<String>, avatar: Option<String>) -> Result<Self> {
        let user = Self {
            username: username.into(),
            avatar,
        };
        user.validate()?;
        Ok(user)
    }
}

/// Conversation schema (collection `conversation`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Conversation {
    /// Conversation title, e.g. "General"
    pub title: String,

    /// Member usernames; `None` for a public room
    #[serde(default)]
    pub members: Option<Vec<String>>,
}

impl Conversation {
    /// Create a new conversation
    pub fn new(title: impl Into<String>, members: Option<Vec<String>>) -> Result<Self> {
        let conversation = Self {
            title: title.into(),
            members,
        };
        conversation.validate()?;
        Ok(conversation)
    }

    /// A room open to everyone
    pub fn public(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            members: None,
        }
    }

    pub fn is_public(&self) -> bool {
        self.members.is_none()
    }
}

/// Message schema (collection `message`)
///
/// `created_at` is not part of the schema: the store stamps it on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Message {
    /// Conversation identifier (hex ObjectId), stored as a string
    pub conversation_id: String,

    /// Sender username
    #[validate(length(min = 2, max = 32))]
    pub sender: String,

    /// Message content
    #[validate(length(min = 1, max = 4000))]
    pub text: String,
}

impl Message {
    /// Create a new message
    pub fn new(
        conversation_id: impl Into<String>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self> {
        let message = Self {
            conversation_id: conversation_id.into(),
            sender: sender.into(),
            text: text.into(),
        };
        message.validate()?;
        Ok(message)
    }
}

/// Stored user
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Stored conversation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConversationRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub members: Option<Vec<String>>,
}

/// Stored message
///
/// Every field other than `_id` is optional so that documents written by
/// other tools still list instead of failing the whole request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub created_at: Option<bson::DateTime>,
}

impl MessageRecord {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.map(|t| t.to_chrono())
    }
}
