//! Shared test harness: a fully wired router over in-process adapters.

// Each integration test binary compiles this module; not all of them use
// every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use entree::adapters::gateway::MockPaymentGateway;
use entree::adapters::http::{api_router, AppState};
use entree::adapters::memory::{
    InMemoryCheckInLedger, InMemoryIntentStore, InMemoryPassRegistry, InMemoryUserDirectory,
};
use entree::adapters::notifier::RecordingNotifier;
use entree::domain::occupancy::OccupancyCounter;
use entree::domain::venue::VenueStatusGate;

/// A wired application plus handles on its adapters for assertions.
pub struct TestApp {
    pub router: Router,
    pub registry: Arc<InMemoryPassRegistry>,
    pub directory: Arc<InMemoryUserDirectory>,
    pub ledger: Arc<InMemoryCheckInLedger>,
    pub intents: Arc<InMemoryIntentStore>,
    pub gateway: Arc<MockPaymentGateway>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn test_app() -> TestApp {
    let registry = Arc::new(InMemoryPassRegistry::new());
    let directory = Arc::new(InMemoryUserDirectory::new());
    let ledger = Arc::new(InMemoryCheckInLedger::new());
    let intents = Arc::new(InMemoryIntentStore::new());
    let gateway = Arc::new(MockPaymentGateway::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let occupancy = Arc::new(OccupancyCounter::new(directory.clone()));
    let venue = Arc::new(VenueStatusGate::new(occupancy.clone()));

    let state = AppState {
        registry: registry.clone(),
        directory: directory.clone(),
        ledger: ledger.clone(),
        intents: intents.clone(),
        gateway: gateway.clone(),
        notifier: notifier.clone(),
        occupancy,
        venue,
        gateway_client_key: "test_client_key".to_string(),
        frontend_base_url: "http://localhost:3000".to_string(),
        callback_url: "http://localhost:5000/payments/callback".to_string(),
    };

    TestApp {
        router: api_router(state),
        registry,
        directory,
        ledger,
        intents,
        gateway,
        notifier,
    }
}

/// Sends a GET and returns status plus body text.
pub async fn get(app: &TestApp, uri: &str) -> (StatusCode, String) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

/// Sends a bodyless POST and returns status plus body text.
pub async fn post(app: &TestApp, uri: &str) -> (StatusCode, String) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// Sends a JSON POST and returns status plus body text.
pub async fn post_json(
    app: &TestApp,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, String) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, String) {
    let response = app
        .router
        .clone()
        .oneshot(request)
        .await
        .expect("request is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads to completion");
    (status, String::from_utf8_lossy(&bytes).to_string())
}

/// Sends a request and returns the Location header of the redirect.
pub async fn redirect_target(app: &TestApp, request: Request<Body>) -> (StatusCode, String) {
    let response = app
        .router
        .clone()
        .oneshot(request)
        .await
        .expect("request is infallible");
    let status = response.status();
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    (status, location)
}
