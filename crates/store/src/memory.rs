//! In-memory backend
//!
//! Keeps collections in process memory. Selected with `DATABASE_URL=memory://`
//! and used by the test suites. Filters are flat field equality, matching the
//! way the MongoDB backend is queried by the repositories.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use bson::{oid::ObjectId, Bson, Document};
use chatline_common::{Error, Result};

use crate::{stamp, DocumentStore, Query, SortOrder};

type Collections = HashMap<String, Vec<Document>>;

/// Document store held entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: Mutex<Collections>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored in `collection`
    pub fn count(&self, collection: &str) -> usize {
        self.lock()
            .map(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>> {
        self.collections
            .lock()
            .map_err(|_| Error::Internal("In-memory store lock poisoned".to_string()))
    }
}

fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, expected)| match document.get(key) {
        Some(actual) => actual == expected,
        // MongoDB treats a missing field as equal to null
        None => matches!(expected, Bson::Null),
    })
}

fn compare(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    // missing and null sort before everything else
    let a = a.filter(|v| !matches!(v, Bson::Null));
    let b = b.filter(|v| !matches!(v, Bson::Null));

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Bson::DateTime(a)), Some(Bson::DateTime(b))) => a.cmp(b),
        (Some(Bson::String(a)), Some(Bson::String(b))) => a.cmp(b),
        (Some(Bson::ObjectId(a)), Some(Bson::ObjectId(b))) => a.cmp(b),
        (Some(a), Some(b)) => match (number(a), number(b)) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}

fn number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Double(v) => Some(*v),
        _ => None,
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create_document(&self, collection: &str, data: Document) -> Result<String> {
        let id = ObjectId::new();

        let mut document = Document::new();
        document.insert("_id", id);
        document.extend(stamp(data));

        self.lock()?
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id.to_hex())
    }

    async fn list_documents(&self, collection: &str, query: Query) -> Result<Vec<Document>> {
        let mut documents: Vec<Document> = self
            .lock()?
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches_filter(d, &query.filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some((field, order)) = &query.sort {
            // stable: equal keys keep insertion order
            documents.sort_by(|a, b| {
                let ordering = compare(a.get(field), b.get(field));
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit.filter(|l| *l > 0) {
            documents.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>> {
        Ok(self
            .lock()?
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| matches_filter(d, &filter)).cloned()))
    }

    async fn ping(&self) -> Result<()> {
        self.lock().map(|_| ())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
