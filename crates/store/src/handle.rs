//! Process-wide store handle
//!
//! Built once at startup and cloned into every handler through axum state.
//! A failed connection does not stop the server: the handle becomes
//! [`StoreHandle::Unavailable`] and store-backed endpoints answer with
//! `Error::ServiceUnavailable`.

use std::fmt;
use std::sync::Arc;

use chatline_common::{DatabaseConfig, Error, Result};

use crate::{DocumentStore, InMemoryDocumentStore, MongoDocumentStore};

/// URL scheme selecting the in-memory backend
pub const MEMORY_URL_SCHEME: &str = "memory://";

#[derive(Clone)]
pub enum StoreHandle {
    Connected(Arc<dyn DocumentStore>),
    Unavailable,
}

impl StoreHandle {
    /// Connect according to `config`, falling back to `Unavailable` on any failure
    pub async fn connect(config: &DatabaseConfig) -> Self {
        let Some(url) = config.url.as_deref() else {
            tracing::warn!("DATABASE_URL is not set; document store unavailable");
            return StoreHandle::Unavailable;
        };

        if url.starts_with(MEMORY_URL_SCHEME) {
            tracing::info!("Using in-memory document store");
            return Self::memory();
        }

        let Some(name) = config.name.as_deref() else {
            tracing::warn!("DATABASE_NAME is not set; document store unavailable");
            return StoreHandle::Unavailable;
        };

        match Self::connect_mongo(url, name).await {
            Ok(store) => {
                tracing::info!(database = name, "Document store connected");
                StoreHandle::Connected(Arc::new(store))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Document store unavailable");
                StoreHandle::Unavailable
            }
        }
    }

    async fn connect_mongo(url: &str, name: &str) -> Result<MongoDocumentStore> {
        let store = MongoDocumentStore::connect(url, name).await?;
        store.ping().await?;
        Ok(store)
    }

    /// Handle over a fresh, empty in-memory store
    pub fn memory() -> Self {
        StoreHandle::Connected(Arc::new(InMemoryDocumentStore::new()))
    }

    /// The connected store, or `ServiceUnavailable`
    pub fn store(&self) -> Result<Arc<dyn DocumentStore>> {
        match self {
            StoreHandle::Connected(store) => Ok(Arc::clone(store)),
            StoreHandle::Unavailable => Err(Error::ServiceUnavailable),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, StoreHandle::Connected(_))
    }
}

impl<S: DocumentStore + 'static> From<Arc<S>> for StoreHandle {
    fn from(store: Arc<S>) -> Self {
        StoreHandle::Connected(store)
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreHandle::Connected(store) => write!(f, "Connected({})", store.backend()),
            StoreHandle::Unavailable => write!(f, "Unavailable"),
        }
    }
}
