//! Check-in history endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::application::handlers::ledger::{ClearHistoryCommand, GetHistoryQuery};
use crate::domain::foundation::{OwnerId, Timestamp};
use crate::domain::ledger::CheckInRecord;

use super::error::ApiError;
use super::state::AppState;

/// Check-in routes, mounted at `/checkins`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/history/:owner_id", get(history))
        .route("/clear-history/:owner_id", post(clear_history))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckInResponse {
    date: Timestamp,
}

impl From<CheckInRecord> for CheckInResponse {
    fn from(record: CheckInRecord) -> Self {
        Self {
            date: record.timestamp,
        }
    }
}

/// GET /checkins/history/{owner_id} - visible history, newest first.
async fn history(
    State(state): State<AppState>,
    Path(owner_id): Path<OwnerId>,
) -> Result<Json<Vec<CheckInResponse>>, ApiError> {
    let records = state
        .get_history_handler()
        .handle(GetHistoryQuery { owner_id })
        .await?;
    Ok(Json(records.into_iter().map(CheckInResponse::from).collect()))
}

/// POST /checkins/clear-history/{owner_id} - hide the owner's history.
async fn clear_history(
    State(state): State<AppState>,
    Path(owner_id): Path<OwnerId>,
) -> Result<StatusCode, ApiError> {
    state
        .clear_history_handler()
        .handle(ClearHistoryCommand { owner_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
