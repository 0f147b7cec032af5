//! Order placement and merchant order listing.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use krishibazaar_core::{Order, OrderDraft, UserId};

use crate::error::Result;
use crate::state::AppState;

/// Place an order.
///
/// The item snapshots are stored exactly as supplied.
///
/// # Errors
///
/// Returns 500 if the record store cannot be written.
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<OrderDraft>,
) -> Result<(StatusCode, Json<Order>)> {
    let order = state.store().place_order(draft).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Every order containing at least one of the merchant's items.
///
/// An unknown merchant id simply yields an empty list.
///
/// # Errors
///
/// Returns 500 if the orders record cannot be read.
pub async fn for_merchant(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<Vec<Order>>> {
    let orders = state.store().orders_for_merchant(&id).await?;
    Ok(Json(orders))
}
