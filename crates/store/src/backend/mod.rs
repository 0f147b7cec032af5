//! Pluggable persistence for the marketplace store.
//!
//! A backend is a durable key-value medium holding one JSON document per
//! [`RecordKey`]. Backends move bytes; decoding and every domain rule live
//! in the [`Store`](crate::Store) above them.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;

use async_trait::async_trait;
use thiserror::Error;

/// The closed set of records the store persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Products,
    Users,
    Orders,
    CurrentUser,
    Cart,
}

impl RecordKey {
    /// Every record key, collections first.
    pub const ALL: [Self; 5] = [
        Self::Products,
        Self::Users,
        Self::Orders,
        Self::CurrentUser,
        Self::Cart,
    ];

    /// The name the record is stored under.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Users => "users",
            Self::Orders => "orders",
            Self::CurrentUser => "current_user",
            Self::Cart => "cart",
        }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The medium could not be read or written.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A durable key-value medium holding one JSON document per record.
///
/// Writes replace the whole document; there is no partial update at this
/// layer. A single logical writer is assumed, so the last write wins.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the raw document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the medium cannot be read.
    async fn read(&self, key: RecordKey) -> Result<Option<String>, StorageError>;

    /// Replace the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the medium cannot be written.
    async fn write(&self, key: RecordKey, value: &str) -> Result<(), StorageError>;

    /// Delete the document stored under `key`.
    ///
    /// Removing a record that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the medium cannot be written.
    async fn remove(&self, key: RecordKey) -> Result<(), StorageError>;
}
