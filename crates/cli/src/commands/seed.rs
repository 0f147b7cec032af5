//! Seed the record store with the demo data set.
//!
//! Collections that already exist are left byte-for-byte untouched, so
//! running this against a live data directory is safe.

use tracing::info;

use krishibazaar_core::ProductFilter;

use super::open_store;

/// Seed any missing collection, then report what the store holds.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened or written.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store().await?;
    store.ensure_initialized().await?;

    let products = store.list_products(&ProductFilter::default()).await?;

    info!("Seeding complete!");
    info!("  Products on record: {}", products.len());

    Ok(())
}
