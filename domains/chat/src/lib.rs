//! Chat domain: users, conversations, messages

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    Conversation, ConversationRecord, Message, MessageRecord, User, UserRecord,
    DEFAULT_CONVERSATION_TITLE,
};

// Re-export repository types
pub use repository::{
    ChatRepositories, ConversationRepository, MessageRepository, UserRepository,
};

// Re-export API types
pub use api::routes;
pub use api::ChatState;
