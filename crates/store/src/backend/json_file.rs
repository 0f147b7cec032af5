//! JSON-file storage backend.
//!
//! Persists each record as `<key>.json` under a data directory, so the
//! whole store is a handful of human-readable files:
//!
//! ```text
//! data/
//!   products.json
//!   users.json
//!   orders.json
//!   current_user.json
//!   cart.json
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::{RecordKey, StorageBackend, StorageError};

/// Durable backend writing one file per record.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    /// Open a backend rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: RecordKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

#[async_trait]
impl StorageBackend for JsonFileBackend {
    async fn read(&self, key: RecordKey) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: RecordKey, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: RecordKey) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
