//! HTTP handlers for the Chat domain

pub mod conversations;
pub mod messages;
pub mod system;
pub mod users;
