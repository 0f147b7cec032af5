//! CLI command implementations.

pub mod orders;
pub mod products;
pub mod seed;
pub mod user;

use std::sync::Arc;

use krishibazaar_store::{JsonFileBackend, Store, SystemClock, UuidIds};

/// Open the store over the configured data directory.
///
/// Reads `KRISHIBAZAAR_DATA_DIR` (default `./data`), the same variable the
/// server uses, so both tools work on one data set.
pub(crate) async fn open_store() -> Result<Store, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let data_dir =
        std::env::var("KRISHIBAZAAR_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
    let backend = JsonFileBackend::open(data_dir).await?;

    Ok(Store::new(
        Arc::new(backend),
        Arc::new(UuidIds),
        Arc::new(SystemClock),
    ))
}
