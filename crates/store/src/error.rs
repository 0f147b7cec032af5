//! Store error types.

use krishibazaar_core::ProductId;
use thiserror::Error;

use crate::backend::{RecordKey, StorageError};

/// Errors returned by store operations.
///
/// The first three variants are the contract's user-facing failures and
/// always leave the medium unchanged. The rest are infrastructure faults.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An account with this email already exists.
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// No account matches the supplied email and password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// No product with this id.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// A stored record could not be decoded.
    #[error("stored {key} record is corrupt: {source}")]
    Corrupt {
        key: RecordKey,
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be encoded for storage.
    #[error("could not encode {key} record: {source}")]
    Encode {
        key: RecordKey,
        #[source]
        source: serde_json::Error,
    },

    /// The storage medium failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
