//! Order records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{OrderId, ProductId, UserId};

/// One line of an order.
///
/// A denormalized snapshot of the product at checkout time. The name and
/// price here never change, regardless of later catalog updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub qty: u32,
    pub merchant_id: UserId,
}

/// A placed order. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Placement time, ISO-8601 on the wire.
    pub date: DateTime<Utc>,
    pub buyer_id: UserId,
    pub items: Vec<OrderItem>,
}

/// Checkout input: the buyer plus the item snapshots to freeze.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub buyer_id: UserId,
    pub items: Vec<OrderItem>,
}
