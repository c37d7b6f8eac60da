//! MongoDB backend

use std::time::Duration;

use bson::{doc, Document};
use chatline_common::{Error, Result};
use futures::TryStreamExt;
use mongodb::{options::ClientOptions, Client, Database};

use crate::{stamp, DocumentStore, Query};

/// How long the driver waits for a usable server before failing an operation
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Document store backed by one MongoDB database
#[derive(Debug, Clone)]
pub struct MongoDocumentStore {
    db: Database,
}

impl MongoDocumentStore {
    /// Build a client for `url` and select `database`.
    ///
    /// The driver connects lazily; call [`DocumentStore::ping`] to find out
    /// whether the server is actually reachable.
    pub async fn connect(url: &str, database: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(url).await?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        options.app_name = Some("chatline".to_string());

        let client = Client::with_options(options)?;
        Ok(Self {
            db: client.database(database),
        })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait::async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn create_document(&self, collection: &str, data: Document) -> Result<String> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(stamp(data))
            .await?;

        result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .ok_or_else(|| Error::Internal("Inserted document has no ObjectId".to_string()))
    }

    async fn list_documents(&self, collection: &str, query: Query) -> Result<Vec<Document>> {
        let collection = self.db.collection::<Document>(collection);
        let mut find = collection.find(query.filter);

        if let Some((field, order)) = query.sort {
            let mut sort = Document::new();
            sort.insert(field, order.direction());
            find = find.sort(sort);
        }
        if let Some(limit) = query.limit {
            find = find.limit(limit);
        }

        let documents: Vec<Document> = find.await?.try_collect().await?;
        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        let document = self
            .db
            .collection::<Document>(collection)
            .find_one(filter)
            .await?;
        Ok(document)
    }

    async fn ping(&self) -> Result<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}
