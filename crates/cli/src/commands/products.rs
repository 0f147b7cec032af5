//! Catalog inspection commands.

use tracing::info;

use krishibazaar_core::{ProductFilter, ProductType, UserId};

use super::open_store;

/// List products matching the filters, promoted first.
///
/// # Errors
///
/// Returns an error if the type filter is unknown or the store cannot be
/// read.
pub async fn list(
    kind: Option<&str>,
    search: Option<&str>,
    merchant: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let kind = kind.map(str::parse::<ProductType>).transpose()?;

    let store = open_store().await?;
    let products = store
        .list_products(&ProductFilter {
            kind,
            search: search.map(str::to_owned),
            merchant: merchant.map(UserId::new),
        })
        .await?;

    info!("{} product(s)", products.len());
    for product in &products {
        let tag = if product.promoted { " [promoted]" } else { "" };
        info!(
            "  {} {} ({}) ₹{} x{} by {}{}",
            product.id,
            product.name,
            product.kind,
            product.price,
            product.qty,
            product.merchant_id,
            tag
        );
    }

    Ok(())
}
