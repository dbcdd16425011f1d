//! Payment endpoints.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::Method;
use axum::response::{IntoResponse, Redirect};
use axum::routing::{any, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::application::handlers::payment::{
    GetPaymentMethodsQuery, PurgeStaleIntentsCommand, ReconcileCallbackCommand,
    SubmitPaymentCommand,
};
use crate::domain::foundation::{OrderRef, OwnerId, Timestamp};
use crate::domain::pass::PassKind;
use crate::domain::payment::RedirectPage;

use super::error::ApiError;
use super::state::AppState;

/// How long an abandoned intent may linger before the purge drops it.
const STALE_INTENT_AGE_DAYS: i64 = 1;

/// Payment routes, mounted at `/payments`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/methods", post(payment_methods))
        .route("/submit", post(submit_payment))
        // The bank's redirect may come back as GET or POST.
        .route("/callback", any(callback))
        .route("/intents/purge", post(purge_intents))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentMethodsRequest {
    kind: PassKind,
}

/// POST /payments/methods - method selector payload for the drop-in.
async fn payment_methods(
    State(state): State<AppState>,
    Json(request): Json<PaymentMethodsRequest>,
) -> Result<Json<Value>, ApiError> {
    let methods = state
        .payment_methods_handler()
        .handle(GetPaymentMethodsQuery { kind: request.kind })
        .await?;

    Ok(Json(json!({
        "clientKey": state.gateway_client_key,
        "paymentMethodsResponse": methods,
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitPaymentRequestBody {
    owner_id: OwnerId,
    kind: PassKind,
    photo_ref: String,
    payment_method: Value,
}

/// POST /payments/submit - start a payment flow.
async fn submit_payment(
    State(state): State<AppState>,
    Json(request): Json<SubmitPaymentRequestBody>,
) -> Result<Json<Value>, ApiError> {
    let result = state
        .submit_payment_handler()
        .handle(SubmitPaymentCommand {
            owner_id: request.owner_id,
            kind: request.kind,
            photo_ref: request.photo_ref,
            payment_method: request.payment_method,
        })
        .await?;

    Ok(Json(json!({
        "orderRef": result.order_ref,
        "resultCode": result.result_code.to_string(),
        "action": result.action.map(|a| a.raw),
    })))
}

/// ALL /payments/callback - the shopper returning from their bank.
///
/// Resolves the flow and redirects to one of the five frontend result
/// pages. Failures never bubble as errors here; the shopper lands on the
/// error page and the intent stays parked for the next delivery.
async fn callback(
    State(state): State<AppState>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    form: Option<Form<HashMap<String, String>>>,
) -> impl IntoResponse {
    let page = match query.get("orderRef").and_then(|r| r.parse::<OrderRef>().ok()) {
        Some(order_ref) => {
            let source = if method == Method::GET {
                &query
            } else {
                form.as_ref().map(|f| &f.0).unwrap_or(&query)
            };
            let details = redirect_details(source);

            match state
                .reconcile_callback_handler()
                .handle(ReconcileCallbackCommand { order_ref, details })
                .await
            {
                Ok(result) => result.redirect_page(),
                Err(err) => {
                    tracing::error!(order_ref = %order_ref, error = %err, "callback failed");
                    RedirectPage::Error
                }
            }
        }
        None => {
            tracing::warn!("callback without usable orderRef");
            RedirectPage::Error
        }
    };

    Redirect::to(&format!(
        "{}/PaymentResult/{}",
        state.frontend_base_url,
        page.path_segment()
    ))
}

/// Builds the details payload from whatever the bank's redirect carried.
fn redirect_details(params: &HashMap<String, String>) -> Value {
    if let Some(payload) = params.get("payload") {
        json!({ "payload": payload })
    } else if let Some(redirect_result) = params.get("redirectResult") {
        json!({ "redirectResult": redirect_result })
    } else {
        json!({
            "MD": params.get("MD"),
            "PaRes": params.get("PaRes"),
        })
    }
}

/// POST /payments/intents/purge - scheduler entry point dropping abandoned
/// intents.
async fn purge_intents(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let purged = state
        .purge_intents_handler()
        .handle(PurgeStaleIntentsCommand {
            older_than: Timestamp::now().add_days(-STALE_INTENT_AGE_DAYS),
        })
        .await?;
    Ok(Json(json!({ "purged": purged })))
}
