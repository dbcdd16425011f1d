//! Check-in ledger port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OwnerId};
use crate::domain::ledger::CheckInRecord;

/// Port for the append-only admission history.
#[async_trait]
pub trait CheckInLedger: Send + Sync {
    /// Appends a record. Records are never updated afterwards except for
    /// the visibility flag.
    async fn append(&self, record: &CheckInRecord) -> Result<(), DomainError>;

    /// The owner's visible records, newest first.
    async fn visible_history(&self, owner_id: &OwnerId)
        -> Result<Vec<CheckInRecord>, DomainError>;

    /// Hides every record for the owner. Idempotent.
    ///
    /// Returns the number of records that changed visibility.
    async fn hide_all(&self, owner_id: &OwnerId) -> Result<u64, DomainError>;

    /// All records for the owner, hidden or not.
    ///
    /// Aggregate consumers use this; they must never filter on visibility.
    async fn records_for_owner(
        &self,
        owner_id: &OwnerId,
    ) -> Result<Vec<CheckInRecord>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_in_ledger_is_object_safe() {
        fn _accepts_dyn(_ledger: &dyn CheckInLedger) {}
    }
}
