//! Admission endpoints.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;

use crate::application::handlers::admission::VerifyPassCommand;
use crate::domain::admission::VerificationOutcome;
use crate::domain::foundation::PassId;

use super::error::ApiError;
use super::state::AppState;

/// Admission routes, mounted at `/tickets`.
pub fn router() -> Router<AppState> {
    Router::new().route("/verify/:id", get(verify_pass))
}

/// GET /tickets/verify/{id} - verify a scanned pass.
///
/// Always answers 200 with the operator message; a QR code that is not
/// even a pass id is simply an invalid one.
async fn verify_pass(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let Ok(pass_id) = id.parse::<PassId>() else {
        return Ok(VerificationOutcome::InvalidId.message());
    };

    let outcome = state
        .verify_pass_handler()
        .handle(VerifyPassCommand { pass_id })
        .await?;
    Ok(outcome.message())
}
