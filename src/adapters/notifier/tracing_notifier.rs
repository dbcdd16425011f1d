//! Notifier that emits structured log events.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OwnerId};
use crate::domain::pass::{Pass, PassKind};
use crate::ports::Notifier;

/// Emits each notification as a structured tracing event.
///
/// The mail collaborator consumes these; the core never composes mail.
#[derive(Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn send_purchase_confirmation(
        &self,
        owner_id: &OwnerId,
        kind: PassKind,
    ) -> Result<(), DomainError> {
        tracing::info!(owner = %owner_id, kind = %kind, "purchase confirmation requested");
        Ok(())
    }

    async fn send_expiry_reminder(&self, pass: &Pass) -> Result<(), DomainError> {
        tracing::info!(
            pass = %pass.id,
            owner = %pass.owner_id,
            valid_until = %pass.valid_until,
            "expiry reminder requested"
        );
        Ok(())
    }
}
