//! KrishiBazaar Core - Shared types library.
//!
//! This crate provides common types used across all KrishiBazaar components:
//! - `store` - Persistence and query facade over the record store
//! - `server` - REST API fronting the store
//! - `cli` - Command-line tools for seeding and inspection
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, emails, roles, and the marketplace records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
