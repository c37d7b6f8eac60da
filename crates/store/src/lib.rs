//! Document store adapter for Chatline
//!
//! Exposes generic create/list/find operations over named collections. Two
//! backends implement [`DocumentStore`]: MongoDB for deployments and an
//! in-memory store for tests and local runs. Handlers never see a backend
//! directly; they go through a [`StoreHandle`], which is either connected or
//! explicitly unavailable.

pub mod handle;
pub mod identifier;
pub mod memory;
pub mod mongo;

use bson::{Bson, Document};
use chatline_common::Result;
use serde::{de::DeserializeOwned, Serialize};

pub use handle::StoreHandle;
pub use identifier::{is_valid_identifier, parse_identifier, IDENTIFIER_LENGTH};
pub use memory::InMemoryDocumentStore;
pub use mongo::MongoDocumentStore;

/// Sort direction for [`Query`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// MongoDB sort specification value
    pub fn direction(&self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

/// Selection of documents within one collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Field equality filter; empty matches everything
    pub filter: Document,
    pub sort: Option<(String, SortOrder)>,
    pub limit: Option<i64>,
}

impl Query {
    /// Every document in the collection, in no particular order
    pub fn all() -> Self {
        Self::default()
    }

    /// Documents whose fields equal every entry of `filter`
    pub fn filter(filter: Document) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn sort_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some((field.into(), order));
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Generic operations over named collections of BSON documents
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `data` into `collection` and return the new identifier.
    ///
    /// `created_at` and `updated_at` are stamped with the current time.
    async fn create_document(&self, collection: &str, data: Document) -> Result<String>;

    /// Documents of `collection` selected by `query`
    async fn list_documents(&self, collection: &str, query: Query) -> Result<Vec<Document>>;

    /// First document of `collection` matching `filter`
    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>>;

    /// One round trip to the backend
    async fn ping(&self) -> Result<()>;

    /// Short backend name for logs
    fn backend(&self) -> &'static str;
}

/// Add the persistence timestamps every inserted document carries
pub(crate) fn stamp(mut data: Document) -> Document {
    let now = Bson::DateTime(bson::DateTime::now());
    data.insert("created_at", now.clone());
    data.insert("updated_at", now);
    data
}

/// Serialize a record into a BSON document
pub fn encode<T: Serialize>(value: &T) -> Result<Document> {
    Ok(bson::to_document(value)?)
}

/// Deserialize a BSON document into a record
pub fn decode<T: DeserializeOwned>(document: Document) -> Result<T> {
    Ok(bson::from_document(document)?)
}
