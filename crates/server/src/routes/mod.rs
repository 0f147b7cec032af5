//! HTTP route handlers for the marketplace API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Health check
//!
//! # Auth
//! POST /signup                  - Create an account (201)
//! POST /login                   - Verify credentials
//!
//! # Products
//! GET  /products                - Listing; ?type=&search=&merchant= filters
//! POST /products                - Add a product (201)
//! PATCH /products/{id}          - Partial update
//!
//! # Orders
//! POST /orders                  - Place an order (201)
//! GET  /merchants/{id}/orders   - Orders containing the merchant's items
//! ```

pub mod auth;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{id}", axum::routing::patch(products::update))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", post(orders::create))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        // Auth routes
        .merge(auth_routes())
        // Product routes
        .nest("/products", product_routes())
        // Order routes
        .nest("/orders", order_routes())
        // Merchant-scoped order listing
        .route("/merchants/{id}/orders", get(orders::for_merchant))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not touch the store.
async fn health() -> &'static str {
    "ok"
}
