//! Application state shared across handlers.

use std::sync::Arc;

use krishibazaar_store::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and hands out the store
/// facade to route handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Store,
}

impl AppState {
    /// Create a new application state over a store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    /// Get a reference to the record store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }
}
