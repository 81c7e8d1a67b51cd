use std::sync::Arc;

use axum::extract::FromRef;

use crate::store::RecordStore;

mod store;
pub use store::*;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new<S: RecordStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl FromRef<AppState> for Arc<dyn RecordStore> {
    fn from_ref(state: &AppState) -> Self {
        // The store handle is an Arc so clone is cheap
        state.store.clone()
    }
}
