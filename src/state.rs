//! Shared application state for all routes.

use crate::service::StudentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    pub fn new<S: StudentStore + 'static>(store: S) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
