//! User repository

use std::sync::Arc;

use bson::doc;
use chatline_common::Result;
use chatline_store::{decode, encode, DocumentStore};

use super::USER_COLLECTION;
use crate::domain::entities::{User, UserRecord};

#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        self.store
            .find_one(USER_COLLECTION, doc! { "username": username })
            .await?
            .map(decode)
            .transpose()
    }

    /// Create a new user, returning its identifier
    pub async fn create(&self, user: &User) -> Result<String> {
        self.store
            .create_document(USER_COLLECTION, encode(user)?)
            .await
    }
}
