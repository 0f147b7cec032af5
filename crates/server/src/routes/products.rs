//! Product catalog handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use krishibazaar_core::{NewProduct, Product, ProductFilter, ProductId, ProductPatch, UserId};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Query parameters accepted by the listing endpoint.
///
/// An empty value means the same as an absent one, so `?type=&search=`
/// lists everything.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
    search: Option<String>,
    merchant: Option<String>,
}

impl ListQuery {
    fn into_filter(self) -> Result<ProductFilter> {
        let kind = match self.kind.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse().map_err(ApiError::BadRequest)?),
        };

        Ok(ProductFilter {
            kind,
            search: self.search.filter(|s| !s.is_empty()),
            merchant: self.merchant.filter(|m| !m.is_empty()).map(UserId::new),
        })
    }
}

/// List products matching the query filters, promoted first.
///
/// # Errors
///
/// Returns 400 `BadRequest` if `type` names an unknown product type.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>> {
    let filter = query.into_filter()?;
    let products = state.store().list_products(&filter).await?;
    Ok(Json(products))
}

/// Add a product to the catalog.
///
/// # Errors
///
/// Returns 500 if the record store cannot be written.
pub async fn create(
    State(state): State<AppState>,
    Json(new_product): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.store().add_product(new_product).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Apply a partial update to a product.
///
/// # Errors
///
/// Returns 404 `NotFound` if no product has this id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let product = state.store().update_product(&id, &patch).await?;
    Ok(Json(product))
}
