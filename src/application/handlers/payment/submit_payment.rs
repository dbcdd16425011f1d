//! SubmitPaymentHandler - Command handler that starts a payment flow.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::foundation::{DomainError, OrderRef, OwnerId};
use crate::domain::pass::PassKind;
use crate::domain::payment::{PendingPaymentIntent, ResultCode};
use crate::ports::{GatewayAction, PaymentGateway, PaymentIntentStore, SubmitPaymentRequest};

/// Command to submit a payment for a pass purchase.
#[derive(Debug, Clone)]
pub struct SubmitPaymentCommand {
    pub owner_id: OwnerId,
    pub kind: PassKind,
    pub photo_ref: String,
    /// Payment method blob from the frontend drop-in component.
    pub payment_method: Value,
}

/// Result of submitting a payment.
#[derive(Debug, Clone)]
pub struct SubmitPaymentResult {
    pub order_ref: OrderRef,
    pub result_code: ResultCode,
    /// Present when the shopper must complete a bank redirect.
    pub action: Option<GatewayAction>,
}

/// Handler that submits payments and parks an intent while the shopper is
/// away at their bank.
///
/// The price is derived from the pass kind, never taken from the request.
pub struct SubmitPaymentHandler {
    gateway: Arc<dyn PaymentGateway>,
    intents: Arc<dyn PaymentIntentStore>,
    /// Base URL of our own callback endpoint; the order reference is
    /// appended so the redirect back can find its intent.
    callback_url: String,
}

impl SubmitPaymentHandler {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        intents: Arc<dyn PaymentIntentStore>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            intents,
            callback_url: callback_url.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitPaymentCommand,
    ) -> Result<SubmitPaymentResult, DomainError> {
        let order_ref = OrderRef::new();
        let amount = cmd.kind.price();
        let return_url = format!("{}?orderRef={}", self.callback_url, order_ref);

        let response = self
            .gateway
            .submit_payment(SubmitPaymentRequest {
                payment_method: cmd.payment_method,
                amount,
                reference: order_ref,
                return_url,
            })
            .await?;

        // Only flows that send the shopper away need an intent; anything
        // resolved synchronously has nothing left to reconcile.
        if let Some(action) = &response.action {
            self.intents
                .put(&PendingPaymentIntent::new(
                    order_ref,
                    cmd.owner_id,
                    cmd.kind,
                    cmd.photo_ref,
                    action.payment_data.clone(),
                ))
                .await?;
            tracing::info!(order_ref = %order_ref, owner = %cmd.owner_id, "payment intent parked");
        }

        Ok(SubmitPaymentResult {
            order_ref,
            result_code: response.result_code,
            action: response.action,
        })
    }
}
