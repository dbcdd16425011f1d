//! Recording notifier for tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, OwnerId, PassId};
use crate::domain::pass::{Pass, PassKind};
use crate::ports::Notifier;

/// Captures notifications for assertions; optionally fails every send.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned (test-only adapter).
#[derive(Default)]
pub struct RecordingNotifier {
    confirmations: Mutex<Vec<(OwnerId, PassKind)>>,
    reminders: Mutex<Vec<PassId>>,
    fail_sends: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every send fails, for error-path tests.
    pub fn failing() -> Self {
        Self {
            fail_sends: true,
            ..Self::default()
        }
    }

    /// Purchase confirmations recorded so far.
    pub fn confirmations(&self) -> Vec<(OwnerId, PassKind)> {
        self.confirmations
            .lock()
            .expect("RecordingNotifier: lock poisoned")
            .clone()
    }

    /// Number of expiry reminders recorded so far.
    pub fn expiry_reminders(&self) -> usize {
        self.reminders
            .lock()
            .expect("RecordingNotifier: lock poisoned")
            .len()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_purchase_confirmation(
        &self,
        owner_id: &OwnerId,
        kind: PassKind,
    ) -> Result<(), DomainError> {
        if self.fail_sends {
            return Err(DomainError::internal("notifier unavailable"));
        }
        self.confirmations
            .lock()
            .expect("RecordingNotifier: lock poisoned")
            .push((*owner_id, kind));
        Ok(())
    }

    async fn send_expiry_reminder(&self, pass: &Pass) -> Result<(), DomainError> {
        if self.fail_sends {
            return Err(DomainError::internal("notifier unavailable"));
        }
        self.reminders
            .lock()
            .expect("RecordingNotifier: lock poisoned")
            .push(pass.id);
        Ok(())
    }
}
