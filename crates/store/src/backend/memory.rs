//! In-memory storage backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RecordKey, StorageBackend, StorageError};

/// Volatile backend keeping records in a map.
///
/// The default choice for tests; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: RwLock<HashMap<RecordKey, String>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn read(&self, key: RecordKey) -> Result<Option<String>, StorageError> {
        Ok(self.records.read().await.get(&key).cloned())
    }

    async fn write(&self, key: RecordKey, value: &str) -> Result<(), StorageError> {
        self.records.write().await.insert(key, value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: RecordKey) -> Result<(), StorageError> {
        self.records.write().await.remove(&key);
        Ok(())
    }
}
