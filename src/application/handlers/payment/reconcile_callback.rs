//! ReconcileCallbackHandler - Command handler for gateway redirect callbacks.
//!
//! The gateway delivers callbacks at least once, so the whole sequence is
//! idempotent: the intent's removal is the claim, and a callback that finds
//! no intent is a duplicate of one already reconciled.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::foundation::{DomainError, OrderRef};
use crate::domain::pass::Pass;
use crate::domain::payment::{RedirectPage, ResultCode};
use crate::ports::{Notifier, PassRegistry, PaymentGateway, PaymentIntentStore};

/// Command carrying the shopper's redirect details.
#[derive(Debug, Clone)]
pub struct ReconcileCallbackCommand {
    pub order_ref: OrderRef,
    /// Redirect payload (`payload`, `redirectResult`, or `MD`/`PaRes`).
    pub details: Value,
}

/// Result of processing one callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileCallbackResult {
    /// The gateway was consulted and the flow resolved (or stayed pending).
    Completed { result_code: ResultCode },

    /// No intent for this order reference: the flow was already reconciled
    /// by an earlier delivery. Success, without side effects.
    AlreadyHandled,
}

impl ReconcileCallbackResult {
    /// Frontend page the shopper is sent to.
    pub fn redirect_page(&self) -> RedirectPage {
        match self {
            ReconcileCallbackResult::Completed { result_code } => result_code.redirect_page(),
            ReconcileCallbackResult::AlreadyHandled => RedirectPage::Success,
        }
    }
}

/// Handler reconciling gateway confirmations into passes.
///
/// The sole creator of passes from payments and the sole writer/deleter of
/// pending intents.
pub struct ReconcileCallbackHandler {
    intents: Arc<dyn PaymentIntentStore>,
    registry: Arc<dyn PassRegistry>,
    gateway: Arc<dyn PaymentGateway>,
    notifier: Arc<dyn Notifier>,
}

impl ReconcileCallbackHandler {
    pub fn new(
        intents: Arc<dyn PaymentIntentStore>,
        registry: Arc<dyn PassRegistry>,
        gateway: Arc<dyn PaymentGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            intents,
            registry,
            gateway,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: ReconcileCallbackCommand,
    ) -> Result<ReconcileCallbackResult, DomainError> {
        let Some(intent) = self.intents.find(&cmd.order_ref).await? else {
            tracing::info!(order_ref = %cmd.order_ref, "callback for resolved order, ignoring");
            return Ok(ReconcileCallbackResult::AlreadyHandled);
        };

        let verdict = self
            .gateway
            .submit_details(cmd.details, &intent.gateway_payload)
            .await?;

        match verdict.result_code {
            ResultCode::Authorised => {
                // The removal is atomic; a concurrent duplicate that loses
                // the race takes the AlreadyHandled path.
                let Some(intent) = self.intents.remove(&cmd.order_ref).await? else {
                    tracing::info!(order_ref = %cmd.order_ref, "lost reconcile race, ignoring");
                    return Ok(ReconcileCallbackResult::AlreadyHandled);
                };

                let pass = Pass::issue(intent.owner_id, intent.pass_kind, intent.photo_ref);
                self.registry.insert(&pass).await?;
                tracing::info!(
                    order_ref = %cmd.order_ref,
                    pass = %pass.id,
                    owner = %pass.owner_id,
                    "payment reconciled into pass"
                );

                // The pass exists; a failed confirmation mail must not fail
                // the callback or it would be retried into a second pass.
                if let Err(err) = self
                    .notifier
                    .send_purchase_confirmation(&intent.owner_id, intent.pass_kind)
                    .await
                {
                    tracing::warn!(owner = %intent.owner_id, error = %err, "purchase confirmation failed");
                }

                Ok(ReconcileCallbackResult::Completed {
                    result_code: ResultCode::Authorised,
                })
            }
            code @ (ResultCode::Cancelled | ResultCode::Refused) => {
                self.intents.remove(&cmd.order_ref).await?;
                tracing::info!(order_ref = %cmd.order_ref, result = %code, "payment not completed");
                Ok(ReconcileCallbackResult::Completed { result_code: code })
            }
            // Pending, Received, or anything unknown: the intent stays; the
            // next shopper action arrives as a fresh callback.
            code => Ok(ReconcileCallbackResult::Completed { result_code: code }),
        }
    }
}
