//! IssuePassHandler - Command handler for direct pass issuance.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, OwnerId, Timestamp};
use crate::domain::pass::{Pass, PassKind};
use crate::ports::{PassRegistry, UserDirectory};

/// Command to issue a pass directly (operator console, not a payment).
#[derive(Debug, Clone)]
pub struct IssuePassCommand {
    pub owner_id: OwnerId,
    pub kind: PassKind,
    /// Defaults to now.
    pub valid_from: Option<Timestamp>,
    /// Defaults to one year after `valid_from`.
    pub valid_until: Option<Timestamp>,
    pub photo_ref: String,
}

/// Handler for direct issuance.
pub struct IssuePassHandler {
    registry: Arc<dyn PassRegistry>,
    directory: Arc<dyn UserDirectory>,
}

impl IssuePassHandler {
    pub fn new(registry: Arc<dyn PassRegistry>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            registry,
            directory,
        }
    }

    pub async fn handle(&self, cmd: IssuePassCommand) -> Result<Pass, DomainError> {
        if self.directory.get_owner(&cmd.owner_id).await?.is_none() {
            return Err(DomainError::owner_not_found(cmd.owner_id));
        }

        let valid_from = cmd.valid_from.unwrap_or_else(Timestamp::now);
        let valid_until = cmd.valid_until.unwrap_or_else(|| valid_from.add_years(1));
        let pass = Pass::new(cmd.owner_id, cmd.kind, valid_from, valid_until, cmd.photo_ref)?;

        self.registry.insert(&pass).await?;
        tracing::info!(pass = %pass.id, owner = %pass.owner_id, kind = %pass.kind, "pass issued");
        Ok(pass)
    }
}
