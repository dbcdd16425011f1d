//! Occupancy endpoints.
//!
//! All three return the resulting count as plain text; the operator
//! console polls `total` and taps `plus`/`minus` for unscanned walk-ins.

use axum::extract::State;
use axum::routing::get;
use axum::Router;

use super::error::ApiError;
use super::state::AppState;

/// Occupancy routes, mounted at `/occupancy`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/total", get(total))
        .route("/plus", get(plus))
        .route("/minus", get(minus))
}

/// GET /occupancy/total - current count.
async fn total(State(state): State<AppState>) -> Result<String, ApiError> {
    Ok(state.occupancy.current().await?.to_string())
}

/// GET /occupancy/plus - bump the manual adjustment up.
async fn plus(State(state): State<AppState>) -> Result<String, ApiError> {
    Ok(state.occupancy.increment().await?.to_string())
}

/// GET /occupancy/minus - bump the manual adjustment down.
async fn minus(State(state): State<AppState>) -> Result<String, ApiError> {
    Ok(state.occupancy.decrement().await?.to_string())
}
