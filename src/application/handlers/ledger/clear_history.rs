//! ClearHistoryHandler - Command handler for clearing personal history.
//!
//! Hides records from the owner's view without deleting them; aggregate
//! consumers keep seeing the full ledger.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, OwnerId};
use crate::ports::{CheckInLedger, UserDirectory};

/// Command to clear an owner's visible history.
#[derive(Debug, Clone)]
pub struct ClearHistoryCommand {
    pub owner_id: OwnerId,
}

pub struct ClearHistoryHandler {
    ledger: Arc<dyn CheckInLedger>,
    directory: Arc<dyn UserDirectory>,
}

impl ClearHistoryHandler {
    pub fn new(ledger: Arc<dyn CheckInLedger>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { ledger, directory }
    }

    /// Idempotent: the visible set is empty afterwards no matter how often
    /// this runs. Returns how many records changed visibility this time.
    pub async fn handle(&self, cmd: ClearHistoryCommand) -> Result<u64, DomainError> {
        if self.directory.get_owner(&cmd.owner_id).await?.is_none() {
            return Err(DomainError::owner_not_found(cmd.owner_id));
        }
        let hidden = self.ledger.hide_all(&cmd.owner_id).await?;
        tracing::info!(owner = %cmd.owner_id, hidden, "check-in history cleared");
        Ok(hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCheckInLedger, InMemoryUserDirectory};
    use crate::domain::foundation::Timestamp;
    use crate::domain::ledger::CheckInRecord;

    #[tokio::test]
    async fn clearing_is_idempotent_and_spares_aggregates() {
        let ledger = Arc::new(InMemoryCheckInLedger::new());
        let directory = Arc::new(InMemoryUserDirectory::new());
        let owner = directory.add_new_owner("Anna", "anna@example.com");
        for _ in 0..4 {
            ledger
                .append(&CheckInRecord::new(owner, Timestamp::now()))
                .await
                .unwrap();
        }

        let handler = ClearHistoryHandler::new(ledger.clone(), directory);

        assert_eq!(
            handler
                .handle(ClearHistoryCommand { owner_id: owner })
                .await
                .unwrap(),
            4
        );
        assert_eq!(
            handler
                .handle(ClearHistoryCommand { owner_id: owner })
                .await
                .unwrap(),
            0
        );
        assert!(ledger.visible_history(&owner).await.unwrap().is_empty());
        // The records themselves survive for aggregate reporting.
        assert_eq!(ledger.records_for_owner(&owner).await.unwrap().len(), 4);
    }
}
