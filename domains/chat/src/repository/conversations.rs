//! Conversation repository

use std::sync::Arc;

use bson::{doc, oid::ObjectId};
use chatline_common::Result;
use chatline_store::{decode, encode, DocumentStore, Query};

use super::CONVERSATION_COLLECTION;
use crate::domain::entities::{Conversation, ConversationRecord};

#[derive(Clone)]
pub struct ConversationRepository {
    store: Arc<dyn DocumentStore>,
}

impl ConversationRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find a conversation by ID
    pub async fn find(&self, id: ObjectId) -> Result<Option<ConversationRecord>> {
        self.find_by(doc! { "_id": id }).await
    }

    /// Find the first conversation with the given title
    pub async fn find_by_title(&self, title: &str) -> Result<Option<ConversationRecord>> {
        self.find_by(doc! { "title": title }).await
    }

    async fn find_by(&self, filter: bson::Document) -> Result<Option<ConversationRecord>> {
        self.store
            .find_one(CONVERSATION_COLLECTION, filter)
            .await?
            .map(decode)
            .transpose()
    }

    /// List every conversation
    pub async fn list(&self) -> Result<Vec<ConversationRecord>> {
        self.store
            .list_documents(CONVERSATION_COLLECTION, Query::all())
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Create a new conversation, returning its identifier
    pub async fn create(&self, conversation: &Conversation) -> Result<String> {
        self.store
            .create_document(CONVERSATION_COLLECTION, encode(conversation)?)
            .await
    }
}
