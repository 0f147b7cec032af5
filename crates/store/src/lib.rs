//! KrishiBazaar Store - persistence and query facade.
//!
//! The [`Store`] fronts three named collections (`users`, `products`,
//! `orders`) plus two scalars (`current_user`, `cart`) held in a pluggable
//! key-value medium. Every operation reads the full record, works on it in
//! memory, and writes it back; the store itself keeps no state between
//! calls.
//!
//! # Modules
//!
//! - [`backend`] - The [`StorageBackend`] trait and its memory/JSON-file implementations
//! - [`store`] - The operations: seeding, identity, catalog, orders
//! - [`ids`] / [`clock`] - Injected id and time sources
//! - [`seed`] - The default dataset installed on first access

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod clock;
pub mod collection;
pub mod error;
pub mod ids;
pub mod seed;
pub mod store;

pub use backend::{JsonFileBackend, MemoryBackend, RecordKey, StorageBackend, StorageError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::StoreError;
pub use ids::{IdGenerator, IdKind, SequenceIds, UuidIds};
pub use store::Store;
