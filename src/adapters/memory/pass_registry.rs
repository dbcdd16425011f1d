//! In-process pass registry.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, OwnerId, PassId, Timestamp};
use crate::domain::pass::Pass;
use crate::ports::PassRegistry;

/// Pass storage backed by a process-local map.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned; a poisoned lock means a
/// writer already panicked and the store can no longer be trusted.
#[derive(Default)]
pub struct InMemoryPassRegistry {
    passes: RwLock<HashMap<PassId, Pass>>,
}

impl InMemoryPassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored passes (for test assertions).
    pub fn len(&self) -> usize {
        self.passes
            .read()
            .expect("InMemoryPassRegistry: lock poisoned")
            .len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PassRegistry for InMemoryPassRegistry {
    async fn insert(&self, pass: &Pass) -> Result<(), DomainError> {
        self.passes
            .write()
            .expect("InMemoryPassRegistry: lock poisoned")
            .insert(pass.id, pass.clone());
        Ok(())
    }

    async fn find(&self, id: &PassId) -> Result<Option<Pass>, DomainError> {
        Ok(self
            .passes
            .read()
            .expect("InMemoryPassRegistry: lock poisoned")
            .get(id)
            .cloned())
    }

    async fn update(&self, pass: &Pass) -> Result<(), DomainError> {
        let mut passes = self
            .passes
            .write()
            .expect("InMemoryPassRegistry: lock poisoned");
        match passes.get_mut(&pass.id) {
            Some(stored) => {
                *stored = pass.clone();
                Ok(())
            }
            None => Err(DomainError::pass_not_found(pass.id)),
        }
    }

    async fn find_for_owner(&self, owner_id: &OwnerId) -> Result<Vec<Pass>, DomainError> {
        Ok(self
            .passes
            .read()
            .expect("InMemoryPassRegistry: lock poisoned")
            .values()
            .filter(|p| p.owner_id == *owner_id)
            .cloned()
            .collect())
    }

    async fn find_expiring_between(
        &self,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Pass>, DomainError> {
        Ok(self
            .passes
            .read()
            .expect("InMemoryPassRegistry: lock poisoned")
            .values()
            .filter(|p| !p.valid_until.is_before(&from) && !p.valid_until.is_after(&to))
            .cloned()
            .collect())
    }
}
