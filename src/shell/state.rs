use std::sync::Arc;

use crate::shared::infrastructure::state_store::StateStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StateStore>,
}
