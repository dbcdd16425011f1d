//! Venue status endpoints.

use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;

use super::error::ApiError;
use super::state::AppState;

/// Venue routes, mounted at `/venue`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/toggle-status", post(toggle_status))
        .route("/status", get(status))
        .route("/checkout-all", post(checkout_all))
}

/// POST /venue/toggle-status - flip Open/Closed.
///
/// Closing also checks everyone out.
async fn toggle_status(State(state): State<AppState>) -> Result<String, ApiError> {
    let status = state.venue.toggle().await?;
    Ok(status.as_str().to_string())
}

/// GET /venue/status - "open" or "closed".
async fn status(State(state): State<AppState>) -> String {
    state.venue.current().await.as_str().to_string()
}

/// POST /venue/checkout-all - mass checkout without touching the status.
async fn checkout_all(State(state): State<AppState>) -> Result<String, ApiError> {
    let checked_out = state.occupancy.reset_on_venue_close().await?;
    Ok(checked_out.to_string())
}
