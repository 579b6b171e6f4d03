//! Storefront catalog browsing and add-to-cart.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::{Path, Query};
use axum::routing::get;
use grocery_client::SessionStore;
use grocery_core::{ProductId, Session, UserType};
use grocery_integration_tests::{StubBackend, ok, product, rejected, settle, wait_until};
use grocery_storefront::ProductsController;
use grocery_storefront::products::{CONFIRMATION_TIMEOUT, CartOutcome};
use serde_json::json;
use tokio::sync::Notify;

fn stock(id: i32) -> u32 {
    match id {
        1 => 40,
        2 => 1,
        _ => 0,
    }
}

fn backend() -> Router {
    Router::new()
        .route(
            "/api/products",
            get(|| async {
                ok(json!([
                    product(1, "Fresh Milk", "4.99", 40),
                    product(2, "Organic Bananas", "2.49", 1),
                ]))
            }),
        )
        .route(
            "/api/products/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                match params.get("name").map(String::as_str) {
                    Some("milk") => ok(json!([product(1, "Fresh Milk", "4.99", 40)])),
                    _ => rejected("No products match your search"),
                }
            }),
        )
        .route(
            "/api/products/{id}/availability",
            get(
                |Path(id): Path<i32>, Query(params): Query<HashMap<String, u32>>| async move {
                    let wanted = params.get("quantity").copied().unwrap_or(1);
                    ok(json!({
                        "available": wanted <= stock(id),
                        "availableQuantity": stock(id)
                    }))
                },
            ),
        )
}

/// Catalog whose availability answers are held until `gate` is notified.
fn gated_backend(gate: Arc<Notify>) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(|| async { ok(json!([product(1, "Fresh Milk", "4.99", 40)])) }),
        )
        .route(
            "/api/products/{id}/availability",
            get(move || {
                let gate = Arc::clone(&gate);
                async move {
                    gate.notified().await;
                    ok(json!({ "available": true, "availableQuantity": 40 }))
                }
            }),
        )
}

fn logged_in() -> SessionStore {
    let session = SessionStore::in_memory();
    session
        .save(&Session {
            user_type: UserType::Customer,
            user_data: json!({ "fullName": "Ada Lovelace" }),
        })
        .unwrap();
    session
}

#[tokio::test]
async fn test_add_to_cart_requires_login() {
    let backend = StubBackend::start(backend()).await;
    let products = ProductsController::new(backend.api(), SessionStore::in_memory());
    products.load().await;
    assert_eq!(backend.hits.total(), 1);

    let outcome = products.add_to_cart(ProductId::new(1)).await;

    assert_eq!(outcome, CartOutcome::LoginRequired);
    assert_eq!(backend.hits.total(), 1);
    assert_eq!(
        products.snapshot().error_message.as_deref(),
        Some("Please login to add items to cart")
    );
}

#[tokio::test]
async fn test_add_to_cart_confirms_then_clears() {
    let backend = StubBackend::start(backend()).await;
    let products = ProductsController::new(backend.api(), logged_in());
    products.load().await;
    products.set_quantity(ProductId::new(1), 2);

    let outcome = products.add_to_cart(ProductId::new(1)).await;

    assert_eq!(outcome, CartOutcome::Added);
    assert_eq!(backend.hits.count("GET", "/api/products/1/availability"), 1);
    let snapshot = products.snapshot();
    assert!(!snapshot.is_adding_to_cart);
    assert_eq!(
        snapshot.success_message.as_deref(),
        Some("Added 2 Fresh Milk(s) to cart!")
    );
    assert_eq!(snapshot.cart.len(), 1);
    assert_eq!(snapshot.cart[0].quantity, 2);
    assert!(products.render().contains("Added 2 Fresh Milk(s) to cart!"));

    tokio::time::pause();
    tokio::time::advance(CONFIRMATION_TIMEOUT - Duration::from_millis(100)).await;
    settle().await;
    assert!(products.snapshot().success_message.is_some());

    tokio::time::advance(Duration::from_millis(200)).await;
    settle().await;
    assert_eq!(products.snapshot().success_message, None);
    assert_eq!(products.snapshot().cart.len(), 1);
}

#[tokio::test]
async fn test_add_to_cart_reports_short_stock() {
    let backend = StubBackend::start(backend()).await;
    let products = ProductsController::new(backend.api(), logged_in());
    products.load().await;
    products.set_quantity(ProductId::new(2), 3);

    let outcome = products.add_to_cart(ProductId::new(2)).await;

    assert_eq!(outcome, CartOutcome::OutOfStock);
    let snapshot = products.snapshot();
    assert_eq!(snapshot.error_message.as_deref(), Some("Only 1 left in stock"));
    assert!(snapshot.cart.is_empty());
}

#[tokio::test]
async fn test_search_and_clear() {
    let backend = StubBackend::start(backend()).await;
    let products = ProductsController::new(backend.api(), SessionStore::in_memory());
    products.load().await;

    products.search("milk").await;
    assert_eq!(products.snapshot().listings.len(), 1);
    assert_eq!(products.all().len(), 2);

    products.search("durian").await;
    let snapshot = products.snapshot();
    assert!(snapshot.listings.is_empty());
    assert_eq!(
        snapshot.error_message.as_deref(),
        Some("No products match your search")
    );

    products.clear_search().await;
    let snapshot = products.snapshot();
    assert_eq!(snapshot.listings.len(), 2);
    assert_eq!(snapshot.error_message, None);
    assert_eq!(backend.hits.count("GET", "/api/products"), 2);
    assert_eq!(backend.hits.count("GET", "/api/products/search"), 2);
}

#[tokio::test]
async fn test_second_add_while_pending_is_ignored() {
    let gate = Arc::new(Notify::new());
    let backend = StubBackend::start(gated_backend(Arc::clone(&gate))).await;
    let products = ProductsController::new(backend.api(), logged_in());
    products.load().await;

    let (first, second) = tokio::join!(products.add_to_cart(ProductId::new(1)), async {
        wait_until(|| backend.hits.count("GET", "/api/products/1/availability") == 1).await;
        assert!(products.snapshot().is_adding_to_cart);
        let second = products.add_to_cart(ProductId::new(1)).await;
        gate.notify_one();
        second
    });

    assert_eq!(first, CartOutcome::Added);
    assert_eq!(second, CartOutcome::Busy);
    assert_eq!(backend.hits.count("GET", "/api/products/1/availability"), 1);
    assert_eq!(products.snapshot().cart[0].quantity, 1);
}

#[tokio::test]
async fn test_login_prompt_replaces_confirmation() {
    let backend = StubBackend::start(backend()).await;
    let session = logged_in();
    let products = ProductsController::new(backend.api(), session.clone());
    products.load().await;
    assert_eq!(products.add_to_cart(ProductId::new(1)).await, CartOutcome::Added);
    assert!(products.snapshot().success_message.is_some());

    session.clear();
    let outcome = products.add_to_cart(ProductId::new(1)).await;

    assert_eq!(outcome, CartOutcome::LoginRequired);
    let snapshot = products.snapshot();
    assert_eq!(snapshot.success_message, None);
    assert_eq!(
        snapshot.error_message.as_deref(),
        Some("Please login to add items to cart")
    );
    assert_eq!(backend.hits.count("GET", "/api/products/1/availability"), 1);
}
