//! HTTP adapters - REST API implementation.
//!
//! Each domain module has its own router; `api_router` assembles them into
//! the application's full surface.

pub mod admission;
pub mod checkins;
pub mod error;
pub mod occupancy;
pub mod passes;
pub mod payments;
pub mod state;
pub mod venue;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use axum::Router;

/// Assemble the complete API router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .nest("/tickets", admission::router())
        .nest("/occupancy", occupancy::router())
        .nest("/venue", venue::router())
        .nest("/payments", payments::router())
        .nest("/checkins", checkins::router())
        .nest("/passes", passes::router())
        .with_state(state)
}
