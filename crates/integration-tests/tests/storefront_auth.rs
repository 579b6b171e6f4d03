//! Storefront login, registration and logout against the stub backend.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use grocery_client::SessionStore;
use grocery_core::UserType;
use grocery_integration_tests::{CountingStorage, StubBackend, customer, ok, settle, wait_until};
use grocery_storefront::forms::Submission;
use grocery_storefront::register::REDIRECT_DELAY;
use grocery_storefront::{
    AppShell, LoginController, LoginForm, MemoryNavigator, Navigation, RegisterController,
    RegisterForm, Route,
};
use secrecy::SecretString;
use serde_json::{Value, json};
use tokio::sync::Notify;

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] != "open-sesame" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Invalid credentials" })),
        )
            .into_response();
    }
    ok(json!({
        "userType": body["userType"],
        "userData": { "fullName": "Ada Lovelace", "email": body["username"] }
    }))
    .into_response()
}

fn backend() -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(|| async { Json(json!({ "success": true })) }))
        .route(
            "/api/customers/register",
            post(|Json(body): Json<Value>| async move {
                ok(customer(
                    "C9",
                    body["fullName"].as_str().unwrap_or_default(),
                    body["email"].as_str().unwrap_or_default(),
                ))
            }),
        )
}

/// Routes whose responses are held until `gate` is notified.
fn gated_backend(gate: Arc<Notify>) -> Router {
    let register_gate = Arc::clone(&gate);
    Router::new()
        .route(
            "/api/auth/login",
            post(move |body: Json<Value>| {
                let gate = Arc::clone(&gate);
                async move {
                    gate.notified().await;
                    login(body).await
                }
            }),
        )
        .route(
            "/api/customers/register",
            post(move || {
                let gate = Arc::clone(&register_gate);
                async move {
                    gate.notified().await;
                    ok(customer("C9", "Grace Hopper", "grace@grocer.test"))
                }
            }),
        )
}

struct Harness {
    backend: StubBackend,
    storage: Arc<CountingStorage>,
    session: SessionStore,
    navigator: Arc<MemoryNavigator>,
}

impl Harness {
    async fn start() -> Self {
        Self::with_router(backend()).await
    }

    async fn with_router(router: Router) -> Self {
        let backend = StubBackend::start(router).await;
        let storage = Arc::new(CountingStorage::new());
        Self {
            backend,
            session: SessionStore::new(storage.clone()),
            storage,
            navigator: Arc::new(MemoryNavigator::new()),
        }
    }

    fn login(&self) -> LoginController {
        LoginController::new(
            self.backend.api(),
            self.session.clone(),
            self.navigator.clone(),
            self.backend.config().admin_login_url,
        )
    }
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_customer_login_goes_to_products() {
    let harness = Harness::start().await;
    let login = harness.login();

    let outcome = login
        .submit(LoginForm::new("ada@grocer.test", "open-sesame", UserType::Customer))
        .await;

    assert_eq!(outcome, Submission::Completed);
    assert_eq!(login.status().success_message.as_deref(), Some("Login successful!"));
    assert_eq!(harness.storage.writes(), 1);
    assert_eq!(
        harness.navigator.history(),
        vec![Navigation::Route(Route::Products)]
    );

    let session = harness.session.load().unwrap();
    assert_eq!(session.user_type, UserType::Customer);
    assert_eq!(session.display_name(), Some("Ada Lovelace"));
}

#[tokio::test]
async fn test_admin_login_redirects_to_admin_console() {
    let harness = Harness::start().await;
    let login = harness.login();

    let outcome = login
        .submit(LoginForm::new("root", "open-sesame", UserType::Admin))
        .await;

    assert_eq!(outcome, Submission::Completed);
    assert_eq!(harness.storage.writes(), 1);
    assert_eq!(
        harness.navigator.last(),
        Some(Navigation::External(harness.backend.config().admin_login_url))
    );
}

#[tokio::test]
async fn test_rejected_login_writes_no_session() {
    let harness = Harness::start().await;
    let login = harness.login();

    let outcome = login
        .submit(LoginForm::new("ada@grocer.test", "wrong", UserType::Customer))
        .await;

    assert_eq!(outcome, Submission::Failed);
    let status = login.status();
    assert_eq!(status.error_message.as_deref(), Some("Invalid credentials"));
    assert!(!status.is_loading);
    assert_eq!(harness.storage.writes(), 0);
    assert!(harness.navigator.history().is_empty());
    assert!(login.render().contains("Invalid credentials"));
}

#[tokio::test]
async fn test_second_login_while_pending_is_ignored() {
    let gate = Arc::new(Notify::new());
    let harness = Harness::with_router(gated_backend(Arc::clone(&gate))).await;
    let login = harness.login();

    let (first, second) = tokio::join!(
        login.submit(LoginForm::new("ada@grocer.test", "open-sesame", UserType::Customer)),
        async {
            wait_until(|| harness.backend.hits.count("POST", "/api/auth/login") == 1).await;
            assert!(login.status().is_loading);
            let second = login
                .submit(LoginForm::new("ada@grocer.test", "open-sesame", UserType::Customer))
                .await;
            gate.notify_one();
            second
        }
    );

    assert_eq!(first, Submission::Completed);
    assert_eq!(second, Submission::Busy);
    assert_eq!(harness.backend.hits.count("POST", "/api/auth/login"), 1);
    assert_eq!(harness.storage.writes(), 1);
}

// =============================================================================
// Registration
// =============================================================================

fn registration(email: &str) -> RegisterForm {
    RegisterForm {
        full_name: "Grace Hopper".to_string(),
        email: email.to_string(),
        password: SecretString::from("cobol-1959"),
        address: "1 Market Street".to_string(),
        contact_number: "555-0100".to_string(),
    }
}

#[tokio::test]
async fn test_registration_redirects_after_delay() {
    let harness = Harness::start().await;
    let register = RegisterController::new(harness.backend.api(), harness.navigator.clone());

    let outcome = register.submit(registration("grace@grocer.test")).await;
    assert_eq!(outcome, Submission::Completed);
    assert_eq!(harness.backend.hits.count("POST", "/api/customers/register"), 1);
    assert!(
        register
            .status()
            .success_message
            .unwrap()
            .starts_with("Registration successful!")
    );

    // The network round trip is done; freeze the clock for the delay.
    tokio::time::pause();
    settle().await;
    assert!(harness.navigator.history().is_empty());

    tokio::time::advance(REDIRECT_DELAY - Duration::from_millis(100)).await;
    settle().await;
    assert!(harness.navigator.history().is_empty());

    tokio::time::advance(Duration::from_millis(200)).await;
    settle().await;
    assert_eq!(
        harness.navigator.history(),
        vec![Navigation::Route(Route::Login)]
    );
}

#[tokio::test]
async fn test_second_registration_while_pending_is_ignored() {
    let gate = Arc::new(Notify::new());
    let harness = Harness::with_router(gated_backend(Arc::clone(&gate))).await;
    let register = RegisterController::new(harness.backend.api(), harness.navigator.clone());

    let (first, second) = tokio::join!(register.submit(registration("grace@grocer.test")), async {
        wait_until(|| harness.backend.hits.count("POST", "/api/customers/register") == 1).await;
        let second = register.submit(registration("grace@grocer.test")).await;
        gate.notify_one();
        second
    });

    assert_eq!(first, Submission::Completed);
    assert_eq!(second, Submission::Busy);
    assert_eq!(harness.backend.hits.count("POST", "/api/customers/register"), 1);
}

#[tokio::test]
async fn test_invalid_registration_sends_nothing() {
    let harness = Harness::start().await;
    let register = RegisterController::new(harness.backend.api(), harness.navigator.clone());

    let outcome = register.submit(registration("not-an-email")).await;

    assert_eq!(outcome, Submission::Invalid);
    assert_eq!(harness.backend.hits.total(), 0);
    assert!(register.status().error_message.is_some());
}

// =============================================================================
// Shell
// =============================================================================

#[tokio::test]
async fn test_logout_after_login() {
    let harness = Harness::start().await;
    harness
        .login()
        .submit(LoginForm::new("ada@grocer.test", "open-sesame", UserType::Customer))
        .await;

    let shell = AppShell::new(
        harness.backend.api(),
        harness.session.clone(),
        harness.navigator.clone(),
    );
    assert!(shell.check_auth_status());
    assert!(shell.header().contains("Ada Lovelace"));

    shell.logout().await;

    assert!(!shell.is_logged_in());
    assert!(!harness.session.is_logged_in());
    assert_eq!(harness.backend.hits.count("POST", "/api/auth/logout"), 1);
    assert_eq!(harness.navigator.last(), Some(Navigation::Route(Route::Home)));
    assert!(shell.header().contains("Login"));
}
