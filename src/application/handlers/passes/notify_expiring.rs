//! NotifyExpiringPassesHandler - reminder sweep for passes expiring soon.
//!
//! Invoked by an external daily scheduler. Finds every pass whose validity
//! ends on the day two weeks out and sends each owner a reminder.

use std::sync::Arc;

use futures::future::join_all;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{Notifier, PassRegistry};

/// Result of one sweep run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyExpiringResult {
    /// Passes found in the expiry window.
    pub found: usize,
    /// Reminders that were actually dispatched.
    pub notified: usize,
}

pub struct NotifyExpiringPassesHandler {
    registry: Arc<dyn PassRegistry>,
    notifier: Arc<dyn Notifier>,
}

impl NotifyExpiringPassesHandler {
    pub fn new(registry: Arc<dyn PassRegistry>, notifier: Arc<dyn Notifier>) -> Self {
        Self { registry, notifier }
    }

    pub async fn handle(&self) -> Result<NotifyExpiringResult, DomainError> {
        let target_day = Timestamp::now().add_days(14);
        let passes = self
            .registry
            .find_expiring_between(target_day.start_of_day(), target_day.end_of_day())
            .await?;
        let found = passes.len();

        let sends = passes
            .iter()
            .map(|pass| self.notifier.send_expiry_reminder(pass));
        let mut notified = 0;
        for (pass, result) in passes.iter().zip(join_all(sends).await) {
            match result {
                Ok(()) => notified += 1,
                Err(err) => {
                    tracing::warn!(pass = %pass.id, error = %err, "expiry reminder failed");
                }
            }
        }

        tracing::info!(found, notified, "expiry reminder sweep finished");
        Ok(NotifyExpiringResult { found, notified })
    }
}
