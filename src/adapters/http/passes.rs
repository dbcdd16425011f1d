//! Pass lifecycle endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::application::handlers::passes::{
    GetPassesForOwnerQuery, IssuePassCommand,
};
use crate::domain::foundation::{OwnerId, Timestamp};
use crate::domain::pass::{Pass, PassKind};

use super::error::ApiError;
use super::state::AppState;

/// Pass routes, mounted at `/passes`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(issue_pass))
        .route("/owner/:owner_id", get(passes_for_owner))
        .route("/expiry-reminders", post(expiry_reminders))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssuePassRequest {
    owner_id: OwnerId,
    kind: PassKind,
    valid_from: Option<Timestamp>,
    valid_until: Option<Timestamp>,
    photo_ref: String,
}

/// POST /passes - direct issuance from the operator console.
async fn issue_pass(
    State(state): State<AppState>,
    Json(request): Json<IssuePassRequest>,
) -> Result<(StatusCode, Json<Pass>), ApiError> {
    let pass = state
        .issue_pass_handler()
        .handle(IssuePassCommand {
            owner_id: request.owner_id,
            kind: request.kind,
            valid_from: request.valid_from,
            valid_until: request.valid_until,
            photo_ref: request.photo_ref,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(pass)))
}

/// GET /passes/owner/{owner_id} - all passes of one owner.
async fn passes_for_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<OwnerId>,
) -> Result<Json<Vec<Pass>>, ApiError> {
    let passes = state
        .passes_for_owner_handler()
        .handle(GetPassesForOwnerQuery { owner_id })
        .await?;
    Ok(Json(passes))
}

/// POST /passes/expiry-reminders - scheduler entry point for the
/// two-weeks-out reminder sweep.
async fn expiry_reminders(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let result = state.notify_expiring_handler().handle().await?;
    Ok(Json(json!({
        "found": result.found,
        "notified": result.notified,
    })))
}
