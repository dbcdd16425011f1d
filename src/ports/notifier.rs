//! Notifier port.
//!
//! Email composition and delivery live with an external collaborator; the
//! core only signals what happened.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OwnerId};
use crate::domain::pass::{Pass, PassKind};

/// Port for owner notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Confirms a completed purchase to the owner.
    async fn send_purchase_confirmation(
        &self,
        owner_id: &OwnerId,
        kind: PassKind,
    ) -> Result<(), DomainError>;

    /// Reminds the owner that a pass is about to expire.
    async fn send_expiry_reminder(&self, pass: &Pass) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_is_object_safe() {
        fn _accepts_dyn(_notifier: &dyn Notifier) {}
    }
}
