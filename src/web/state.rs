//! Shared application state handed to every handler.

use super::session::SessionStore;
use std::sync::Arc;

/// Process-wide state. Repositories open their own connections per
/// request, so the only shared mutable piece is the session store.
pub struct AppState {
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sessions: SessionStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedState = Arc<AppState>;
