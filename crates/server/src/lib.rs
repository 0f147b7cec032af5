//! KrishiBazaar server library.
//!
//! This crate provides the HTTP API as a library so the router can be
//! mounted on an in-process listener in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router over the given state.
///
/// Request tracing and a permissive CORS policy are applied here so every
/// entry point (binary or test harness) serves the same stack.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
