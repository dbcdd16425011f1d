//! Entree backend entry point.
//!
//! Composition root: loads configuration, initializes tracing, wires the
//! adapters together, and serves the API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use entree::adapters::gateway::{AdyenConfig, AdyenGateway};
use entree::adapters::http::{api_router, AppState};
use entree::adapters::memory::{
    InMemoryCheckInLedger, InMemoryIntentStore, InMemoryPassRegistry, InMemoryUserDirectory,
};
use entree::adapters::notifier::TracingNotifier;
use entree::config::AppConfig;
use entree::domain::occupancy::OccupancyCounter;
use entree::domain::venue::VenueStatusGate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.server.log_level)
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = build_state(&config);
    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "entree listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_state(config: &AppConfig) -> AppState {
    let registry = Arc::new(InMemoryPassRegistry::new());
    let directory = Arc::new(InMemoryUserDirectory::new());
    let ledger = Arc::new(InMemoryCheckInLedger::new());
    let intents = Arc::new(InMemoryIntentStore::new());
    let notifier = Arc::new(TracingNotifier::new());

    let adyen_config = AdyenConfig::new(
        config.gateway.api_key.clone(),
        config.gateway.merchant_account.clone(),
    )
    .with_base_url(config.gateway.api_base_url.clone())
    .with_timeout(Duration::from_secs(config.gateway.timeout_secs));
    let gateway = Arc::new(AdyenGateway::new(adyen_config));

    let occupancy = Arc::new(OccupancyCounter::new(directory.clone()));
    let venue = Arc::new(VenueStatusGate::new(occupancy.clone()));

    AppState {
        registry,
        directory,
        ledger,
        intents,
        gateway,
        notifier,
        occupancy,
        venue,
        gateway_client_key: config.gateway.client_key.clone(),
        frontend_base_url: config.gateway.frontend_base_url.clone(),
        callback_url: format!("{}/payments/callback", config.server.public_base_url),
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
