//! End-to-end tests for the grocery ordering clients.
//!
//! Each test starts an in-process stub of the REST backend with
//! [`StubBackend::start`], points a [`ClientConfig`] at it and drives the
//! admin or storefront controllers. The stub counts every request so tests
//! can assert that a call was (or was not) made.
//!
//! ```bash
//! cargo test -p grocery-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used, clippy::missing_panics_doc, clippy::panic)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use axum::Json;
use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use grocery_client::session::{MemoryStorage, SessionError, SessionStorage};
use grocery_client::{ApiClient, ClientConfig};
use serde_json::{Value, json};
use url::Url;

// =============================================================================
// Request Counting
// =============================================================================

/// Requests seen by the stub, keyed by `"<METHOD> <path>"`.
#[derive(Debug, Clone, Default)]
pub struct Hits(Arc<Mutex<HashMap<String, usize>>>);

impl Hits {
    fn record(&self, key: String) {
        let mut hits = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        *hits.entry(key).or_default() += 1;
    }

    /// Requests to exactly `method` and `path` (no query string).
    #[must_use]
    pub fn count(&self, method: &str, path: &str) -> usize {
        let hits = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        hits.get(&format!("{method} {path}")).copied().unwrap_or(0)
    }

    /// Every request of any kind.
    #[must_use]
    pub fn total(&self) -> usize {
        let hits = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        hits.values().sum()
    }
}

async fn count_request(State(hits): State<Hits>, request: Request, next: Next) -> Response {
    hits.record(format!("{} {}", request.method(), request.uri().path()));
    next.run(request).await
}

// =============================================================================
// Stub Backend
// =============================================================================

/// A running stub backend.
#[derive(Debug)]
pub struct StubBackend {
    pub addr: SocketAddr,
    pub hits: Hits,
}

impl StubBackend {
    /// Serve `router` on an ephemeral port, counting every request.
    pub async fn start(router: Router) -> Self {
        let hits = Hits::default();
        let router = router.layer(middleware::from_fn_with_state(hits.clone(), count_request));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, hits }
    }

    #[must_use]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).unwrap()
    }

    #[must_use]
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url())
    }

    #[must_use]
    pub fn api(&self) -> ApiClient {
        ApiClient::new(&self.config()).unwrap()
    }
}

/// A successful envelope around `data`.
#[must_use]
pub fn ok(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

/// A `success: false` envelope with `message`.
#[must_use]
pub fn rejected(message: &str) -> Json<Value> {
    Json(json!({ "success": false, "message": message }))
}

// =============================================================================
// Fixtures
// =============================================================================

#[must_use]
pub fn product(id: i32, name: &str, price: &str, available: u32) -> Value {
    json!({
        "productId": id,
        "productName": name,
        "price": price,
        "availableQuantity": available
    })
}

#[must_use]
pub fn customer(id: &str, full_name: &str, email: &str) -> Value {
    json!({
        "customerId": id,
        "fullName": full_name,
        "email": email,
        "contactNumber": "555-0100",
        "address": "1 Market Street"
    })
}

#[must_use]
pub fn order(id: i32, customer_id: &str, status: &str, amount: &str) -> Value {
    json!({
        "orderId": id,
        "customerId": customer_id,
        "status": status,
        "orderAmount": amount,
        "customerName": "Ada Lovelace",
        "productName": "Fresh Milk",
        "quantityOrdered": 2,
        "orderDate": "2026-03-14T09:30:00"
    })
}

// =============================================================================
// Session Storage
// =============================================================================

/// In-memory session storage that counts writes.
#[derive(Debug, Default)]
pub struct CountingStorage {
    inner: MemoryStorage,
    writes: AtomicUsize,
}

impl CountingStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SessionStorage for CountingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        self.inner.remove_item(key)
    }
}

/// Let spawned tasks woken by a clock advance run to completion.
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Poll `condition` until it holds, yielding to the runtime in between.
///
/// Panics after about five seconds.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    for _ in 0..500 {
        if condition() {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    panic!("condition not met in time");
}
