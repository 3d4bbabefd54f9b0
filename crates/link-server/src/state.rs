use std::sync::Arc;

use link_store::InMemoryStore;

/// Shared state handed to every request handler.
///
/// Holds the service's single store instance; cloning shares it.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<InMemoryStore>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}
