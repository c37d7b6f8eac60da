//! Repository implementations for the Chat domain

pub mod conversations;
pub mod messages;
pub mod users;

use std::sync::Arc;

use chatline_common::Result;
use chatline_store::{DocumentStore, StoreHandle};

pub use conversations::ConversationRepository;
pub use messages::MessageRepository;
pub use users::UserRepository;

/// Collection holding users
pub const USER_COLLECTION: &str = "user";
/// Collection holding conversations
pub const CONVERSATION_COLLECTION: &str = "conversation";
/// Collection holding messages
pub const MESSAGE_COLLECTION: &str = "message";

/// Combined repository access for the Chat domain
#[derive(Clone)]
pub struct ChatRepositories {
    store: Arc<dyn DocumentStore>,
    pub users: UserRepository,
    pub conversations: ConversationRepository,
    pub messages: MessageRepository,
}

impl ChatRepositories {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            users: UserRepository::new(Arc::clone(&store)),
            conversations: ConversationRepository::new(Arc::clone(&store)),
            messages: MessageRepository::new(Arc::clone(&store)),
            store,
        }
    }

    /// Repositories over the connected store, or `ServiceUnavailable`
    pub fn from_handle(handle: &StoreHandle) -> Result<Self> {
        Ok(Self::new(handle.store()?))
    }

    /// Get a reference to the underlying store
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }
}
