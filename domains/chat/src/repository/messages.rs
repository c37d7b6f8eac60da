//! Message repository

use std::sync::Arc;

use bson::doc;
use chatline_common::Result;
use chatline_store::{decode, encode, DocumentStore, Query, SortOrder};

use super::MESSAGE_COLLECTION;
use crate::domain::entities::{Message, MessageRecord};

#[derive(Clone)]
pub struct MessageRepository {
    store: Arc<dyn DocumentStore>,
}

impl MessageRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List up to `limit` messages for a conversation, ordered by created_at ASC
    pub async fn list_by_conversation(
        &self,
        conversation_id: &str,
        limit: i64,
    ) -> Result<Vec<MessageRecord>> {
        let query = Query::filter(doc! { "conversation_id": conversation_id })
            .sort_by("created_at", SortOrder::Ascending)
            .limit(limit);

        self.store
            .list_documents(MESSAGE_COLLECTION, query)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Create a new message, returning its identifier
    pub async fn create(&self, message: &Message) -> Result<String> {
        self.store
            .create_document(MESSAGE_COLLECTION, encode(message)?)
            .await
    }
}
