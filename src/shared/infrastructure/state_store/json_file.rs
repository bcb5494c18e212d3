use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::modules::time_logs::core::interval::PersistedState;
use crate::shared::infrastructure::state_store::{StateStore, StoreError};

/// Single JSON document on disk, pretty-printed, rewritten in full on every
/// save. A missing file is initialized to the empty state on first load.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn load(&self) -> Result<PersistedState, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|err| StoreError::Read(err.to_string()))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let empty = PersistedState::default();
                self.save(&empty).await?;
                Ok(empty)
            }
            Err(err) => Err(StoreError::Read(err.to_string())),
        }
    }

    async fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(state).map_err(|err| StoreError::Write(err.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|err| StoreError::Write(err.to_string()))
    }
}
