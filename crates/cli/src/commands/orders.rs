//! Order inspection commands.

use tracing::info;

use krishibazaar_core::UserId;

use super::open_store;

/// List every order containing the merchant's items.
///
/// Only the merchant's own lines are printed under each order, matching
/// what the merchant dashboard shows.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub async fn list(merchant: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store().await?;
    let merchant = UserId::new(merchant);
    let orders = store.orders_for_merchant(&merchant).await?;

    info!("{} order(s) for {}", orders.len(), merchant);
    for order in &orders {
        info!(
            "  {} placed {} by {}",
            order.id,
            order.date.format("%Y-%m-%d %H:%M"),
            order.buyer_id
        );
        for item in order.items.iter().filter(|item| item.merchant_id == merchant) {
            info!("    {} x{} @ ₹{}", item.name, item.qty, item.price);
        }
    }

    Ok(())
}
