//! KrishiBazaar API server - agricultural marketplace backend.
//!
//! This binary serves the marketplace REST API on port 3000.
//!
//! # Architecture
//!
//! - Axum handlers over the shared `Store` facade
//! - One JSON file per collection under the data directory
//! - Uuid ids and the system clock in production; tests inject both

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use krishibazaar_server::config::ServerConfig;
use krishibazaar_server::state::AppState;
use krishibazaar_store::{JsonFileBackend, Store, SystemClock, UuidIds};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "krishibazaar_server=info,krishibazaar_store=info,tower_http=debug".into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Open the record store and seed any missing collection
    let backend = JsonFileBackend::open(&config.data_dir)
        .await
        .expect("Failed to open data directory");
    let store = Store::new(Arc::new(backend), Arc::new(UuidIds), Arc::new(SystemClock));
    store
        .ensure_initialized()
        .await
        .expect("Failed to initialize record store");
    tracing::info!(data_dir = %config.data_dir.display(), "record store ready");

    // Build router
    let app = krishibazaar_server::app(AppState::new(store));

    // Start server
    let addr = config.socket_addr();
    tracing::info!("krishibazaar listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
