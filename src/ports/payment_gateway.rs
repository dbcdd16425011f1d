//! Payment gateway port.
//!
//! Contract for the external checkout API. Implementations own transport
//! concerns: explicit timeout, at most one retry, and mapping transport
//! failures to `GatewayError` (never a silent hang).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{DomainError, OrderRef};
use crate::domain::pass::Amount;
use crate::domain::payment::ResultCode;

/// Port for the payment gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Fetches the payment-method selector payload for the given amount.
    ///
    /// The response is forwarded to the frontend's drop-in component as-is.
    async fn available_methods(&self, amount: &Amount) -> Result<Value, GatewayError>;

    /// Submits a payment.
    async fn submit_payment(
        &self,
        request: SubmitPaymentRequest,
    ) -> Result<PaymentResponse, GatewayError>;

    /// Submits redirect details to finalize a payment.
    async fn submit_details(
        &self,
        details: Value,
        payment_data: &str,
    ) -> Result<DetailsResponse, GatewayError>;
}

/// Request to submit a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitPaymentRequest {
    /// Payment method blob from the frontend's drop-in component.
    pub payment_method: Value,

    /// Amount in minor units.
    pub amount: Amount,

    /// Order reference, also embedded in `return_url`.
    pub reference: OrderRef,

    /// Where the shopper's bank sends them back to.
    pub return_url: String,
}

/// Response to a submitted payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Gateway verdict so far.
    pub result_code: ResultCode,

    /// Present when the shopper must act further (bank redirect).
    pub action: Option<GatewayAction>,
}

/// A further action the shopper must complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayAction {
    /// Opaque state to echo back with the redirect details.
    pub payment_data: String,

    /// Raw action object for the frontend component.
    pub raw: Value,
}

/// Response to submitted redirect details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailsResponse {
    /// Final (or still-pending) verdict.
    pub result_code: ResultCode,

    /// Gateway's transaction identifier, when present.
    pub psp_reference: Option<String>,
}

/// Errors from gateway operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// Could not reach the gateway, or it did not answer in time.
    #[error("payment gateway unreachable: {0}")]
    Unreachable(String),

    /// The gateway answered with something we cannot interpret.
    #[error("payment gateway protocol error: {0}")]
    Protocol(String),

    /// The gateway rejected the request outright (bad key, bad merchant).
    #[error("payment gateway rejected request: {0}")]
    Rejected(String),
}

impl From<GatewayError> for DomainError {
    fn from(err: GatewayError) -> Self {
        DomainError::upstream(err.to_string())
    }
}
