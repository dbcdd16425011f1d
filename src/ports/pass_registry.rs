//! Pass registry port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OwnerId, PassId, Timestamp};
use crate::domain::pass::Pass;

/// Port for pass storage.
#[async_trait]
pub trait PassRegistry: Send + Sync {
    /// Stores a new pass.
    async fn insert(&self, pass: &Pass) -> Result<(), DomainError>;

    /// Looks up a pass by id.
    async fn find(&self, id: &PassId) -> Result<Option<Pass>, DomainError>;

    /// Replaces a stored pass (keyed by its id).
    ///
    /// Fails with `PassNotFound` if the pass was never stored.
    async fn update(&self, pass: &Pass) -> Result<(), DomainError>;

    /// All passes belonging to an owner.
    async fn find_for_owner(&self, owner_id: &OwnerId) -> Result<Vec<Pass>, DomainError>;

    /// Passes whose `valid_until` falls inside `[from, to]`.
    ///
    /// Used by the expiry-reminder sweep.
    async fn find_expiring_between(
        &self,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Pass>, DomainError>;
}
