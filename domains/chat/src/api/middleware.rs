//! Chat domain state

use chatline_common::Result;
use chatline_store::StoreHandle;

use crate::ChatRepositories;

/// Application state for the Chat domain
#[derive(Clone, Debug)]
pub struct ChatState {
    pub store: StoreHandle,
}

impl ChatState {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Repositories over the shared store; fails with `ServiceUnavailable`
    /// when the store never connected
    pub fn repos(&self) -> Result<ChatRepositories> {
        ChatRepositories::from_handle(&self.store)
    }

    pub fn database_connected(&self) -> bool {
        self.store.is_connected()
    }
}
