//! VerifyPassHandler - Command handler for door admission.

use std::sync::Arc;

use crate::domain::admission::VerificationOutcome;
use crate::domain::foundation::{DomainError, PassId, Timestamp};
use crate::domain::ledger::CheckInRecord;
use crate::domain::pass::PassKind;
use crate::ports::{CheckInLedger, PassRegistry, UserDirectory};

/// Command to verify a presented pass.
#[derive(Debug, Clone)]
pub struct VerifyPassCommand {
    /// The id scanned at the door.
    pub pass_id: PassId,
}

/// Handler for door admission.
///
/// The only orchestrator touching the registry, the directory's checked-in
/// flag, and the ledger per request. A denial is a normal return; only
/// storage or directory faults surface as errors.
pub struct VerifyPassHandler {
    registry: Arc<dyn PassRegistry>,
    directory: Arc<dyn UserDirectory>,
    ledger: Arc<dyn CheckInLedger>,
}

impl VerifyPassHandler {
    pub fn new(
        registry: Arc<dyn PassRegistry>,
        directory: Arc<dyn UserDirectory>,
        ledger: Arc<dyn CheckInLedger>,
    ) -> Self {
        Self {
            registry,
            directory,
            ledger,
        }
    }

    pub async fn handle(
        &self,
        cmd: VerifyPassCommand,
    ) -> Result<VerificationOutcome, DomainError> {
        let now = Timestamp::now();

        let Some(mut pass) = self.registry.find(&cmd.pass_id).await? else {
            return Ok(VerificationOutcome::InvalidId);
        };

        if pass.is_expired(now) {
            return Ok(VerificationOutcome::Expired {
                at: pass.valid_until,
                kind: pass.kind,
            });
        }

        let Some(owner) = self.directory.get_owner(&pass.owner_id).await? else {
            return Ok(VerificationOutcome::UnknownOwner);
        };

        // Single test-and-set: of two concurrent verifies for this owner,
        // only one can pass this point.
        if !self.directory.claim_check_in(&owner.id).await? {
            return Ok(VerificationOutcome::AlreadyCheckedIn);
        }

        // Consuming sets valid_until = now, which is also the "used at"
        // timestamp reported on any resubmission of this pass.
        if pass.kind == PassKind::SingleUse {
            pass.consume(now);
            self.registry.update(&pass).await?;
        }

        self.ledger
            .append(&CheckInRecord::new(pass.owner_id, now))
            .await?;

        tracing::info!(pass = %pass.id, owner = %pass.owner_id, "admission granted");
        Ok(VerificationOutcome::Success)
    }
}
