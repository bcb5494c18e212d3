use async_trait::async_trait;
use thiserror::Error;

use crate::modules::time_logs::core::interval::PersistedState;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("read failed: {0}")]
    Read(String),

    #[error("write failed: {0}")]
    Write(String),
}

/// Read-whole/write-whole document store for the tracker state. No merging,
/// no diffing: every save overwrites the previous document. Kept behind a
/// trait so the single-file JSON store can later be swapped for a
/// transactional one without touching callers.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn load(&self) -> Result<PersistedState, StoreError>;
    async fn save(&self, state: &PersistedState) -> Result<(), StoreError>;
}

pub mod in_memory;
pub mod json_file;
