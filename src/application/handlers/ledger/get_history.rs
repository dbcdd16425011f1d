//! GetHistoryHandler - Query handler for an owner's visible check-in history.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, OwnerId};
use crate::domain::ledger::CheckInRecord;
use crate::ports::{CheckInLedger, UserDirectory};

/// Query for the owner's personal history.
#[derive(Debug, Clone)]
pub struct GetHistoryQuery {
    pub owner_id: OwnerId,
}

pub struct GetHistoryHandler {
    ledger: Arc<dyn CheckInLedger>,
    directory: Arc<dyn UserDirectory>,
}

impl GetHistoryHandler {
    pub fn new(ledger: Arc<dyn CheckInLedger>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { ledger, directory }
    }

    /// Visible records, newest first. A finite, restartable query.
    pub async fn handle(&self, query: GetHistoryQuery) -> Result<Vec<CheckInRecord>, DomainError> {
        if self.directory.get_owner(&query.owner_id).await?.is_none() {
            return Err(DomainError::owner_not_found(query.owner_id));
        }
        self.ledger.visible_history(&query.owner_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCheckInLedger, InMemoryUserDirectory};
    use crate::domain::foundation::Timestamp;

    #[tokio::test]
    async fn history_requires_a_known_owner() {
        let handler = GetHistoryHandler::new(
            Arc::new(InMemoryCheckInLedger::new()),
            Arc::new(InMemoryUserDirectory::new()),
        );
        assert!(handler
            .handle(GetHistoryQuery {
                owner_id: OwnerId::new()
            })
            .await
            .is_err());
    }

    #[tokio::test]
    async fn history_is_newest_first() {
        let ledger = Arc::new(InMemoryCheckInLedger::new());
        let directory = Arc::new(InMemoryUserDirectory::new());
        let owner = directory.add_new_owner("Anna", "anna@example.com");

        let older = Timestamp::now().add_days(-7);
        let newer = Timestamp::now();
        ledger
            .append(&CheckInRecord::new(owner, older))
            .await
            .unwrap();
        ledger
            .append(&CheckInRecord::new(owner, newer))
            .await
            .unwrap();

        let handler = GetHistoryHandler::new(ledger, directory);
        let history = handler
            .handle(GetHistoryQuery { owner_id: owner })
            .await
            .unwrap();

        assert_eq!(history[0].timestamp, newer);
        assert_eq!(history[1].timestamp, older);
    }
}
