//! Integration tests for KrishiBazaar.
//!
//! Each test spawns the full router over a freshly seeded store on an
//! ephemeral port, then talks to it over real HTTP with `reqwest`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p krishibazaar-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::Ipv4Addr;
use std::sync::Arc;

use tokio::net::TcpListener;

use krishibazaar_server::state::AppState;
use krishibazaar_store::{JsonFileBackend, SequenceIds, Store, SystemClock};

/// A spawned API instance bound to an ephemeral port.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Absolute URL for a path on this instance.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Spawn the API over a seeded store in an isolated data directory.
///
/// Ids are sequence-backed, so the first records a test creates are
/// `u_1`, `p_1`, and `o_1`.
///
/// # Panics
///
/// Panics if the store cannot be seeded or the listener cannot bind;
/// either one aborts the test run anyway.
pub async fn spawn_app() -> TestApp {
    let data_dir = std::env::temp_dir().join(format!("kb_it_{}", uuid::Uuid::new_v4()));
    let backend = JsonFileBackend::open(&data_dir)
        .await
        .expect("Failed to open test data directory");

    let store = Store::new(
        Arc::new(backend),
        Arc::new(SequenceIds::new()),
        Arc::new(SystemClock),
    );
    store
        .ensure_initialized()
        .await
        .expect("Failed to seed test store");

    let app = krishibazaar_server::app(AppState::new(store));

    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let base_url = format!("http://{addr}");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("test server error: {e}");
        }
    });

    TestApp {
        base_url,
        client: reqwest::Client::new(),
    }
}
