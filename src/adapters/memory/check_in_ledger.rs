//! In-process check-in ledger.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, OwnerId};
use crate::domain::ledger::CheckInRecord;
use crate::ports::CheckInLedger;

/// Append-only ledger backed by a process-local vector.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Default)]
pub struct InMemoryCheckInLedger {
    records: RwLock<Vec<CheckInRecord>>,
}

impl InMemoryCheckInLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records, hidden ones included (for test assertions).
    pub fn len(&self) -> usize {
        self.records
            .read()
            .expect("InMemoryCheckInLedger: lock poisoned")
            .len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CheckInLedger for InMemoryCheckInLedger {
    async fn append(&self, record: &CheckInRecord) -> Result<(), DomainError> {
        self.records
            .write()
            .expect("InMemoryCheckInLedger: lock poisoned")
            .push(record.clone());
        Ok(())
    }

    async fn visible_history(
        &self,
        owner_id: &OwnerId,
    ) -> Result<Vec<CheckInRecord>, DomainError> {
        let mut history: Vec<CheckInRecord> = self
            .records
            .read()
            .expect("InMemoryCheckInLedger: lock poisoned")
            .iter()
            .filter(|r| r.owner_id == *owner_id && r.visible)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(history)
    }

    async fn hide_all(&self, owner_id: &OwnerId) -> Result<u64, DomainError> {
        let mut records = self
            .records
            .write()
            .expect("InMemoryCheckInLedger: lock poisoned");
        let mut hidden = 0;
        for record in records.iter_mut() {
            if record.owner_id == *owner_id && record.visible {
                record.visible = false;
                hidden += 1;
            }
        }
        Ok(hidden)
    }

    async fn records_for_owner(
        &self,
        owner_id: &OwnerId,
    ) -> Result<Vec<CheckInRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .expect("InMemoryCheckInLedger: lock poisoned")
            .iter()
            .filter(|r| r.owner_id == *owner_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    #[tokio::test]
    async fn history_is_newest_first() {
        let ledger = InMemoryCheckInLedger::new();
        let owner = OwnerId::new();
        let older = Timestamp::now().add_days(-1);
        let newer = Timestamp::now();

        ledger
            .append(&CheckInRecord::new(owner, older))
            .await
            .unwrap();
        ledger
            .append(&CheckInRecord::new(owner, newer))
            .await
            .unwrap();

        let history = ledger.visible_history(&owner).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].timestamp, newer);
        assert_eq!(history[1].timestamp, older);
    }

    #[tokio::test]
    async fn hide_all_is_idempotent_and_preserves_records() {
        let ledger = InMemoryCheckInLedger::new();
        let owner = OwnerId::new();
        for _ in 0..3 {
            ledger
                .append(&CheckInRecord::new(owner, Timestamp::now()))
                .await
                .unwrap();
        }

        assert_eq!(ledger.hide_all(&owner).await.unwrap(), 3);
        assert!(ledger.visible_history(&owner).await.unwrap().is_empty());
        // Second call finds nothing left to hide.
        assert_eq!(ledger.hide_all(&owner).await.unwrap(), 0);
        // Aggregate reads still see everything.
        assert_eq!(ledger.records_for_owner(&owner).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn hiding_one_owner_leaves_others_alone() {
        let ledger = InMemoryCheckInLedger::new();
        let a = OwnerId::new();
        let b = OwnerId::new();
        ledger
            .append(&CheckInRecord::new(a, Timestamp::now()))
            .await
            .unwrap();
        ledger
            .append(&CheckInRecord::new(b, Timestamp::now()))
            .await
            .unwrap();

        ledger.hide_all(&a).await.unwrap();

        assert!(ledger.visible_history(&a).await.unwrap().is_empty());
        assert_eq!(ledger.visible_history(&b).await.unwrap().len(), 1);
    }
}
