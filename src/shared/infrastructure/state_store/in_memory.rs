use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::time_logs::core::interval::PersistedState;
use crate::shared::infrastructure::state_store::{StateStore, StoreError};

/// Test double for the document store. `toggle_offline` makes every call
/// fail, for exercising the error paths of the endpoints.
#[derive(Default)]
pub struct InMemoryStateStore {
    state: Mutex<PersistedState>,
    offline: bool,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn load(&self) -> Result<PersistedState, StoreError> {
        if self.offline {
            return Err(StoreError::Read("state store offline".into()));
        }
        Ok(self.state.lock().await.clone())
    }

    async fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Write("state store offline".into()));
        }
        *self.state.lock().await = state.clone();
        Ok(())
    }
}
