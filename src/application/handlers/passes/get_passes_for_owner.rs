//! GetPassesForOwnerHandler - Query handler for an owner's passes.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, OwnerId};
use crate::domain::pass::Pass;
use crate::ports::{PassRegistry, UserDirectory};

/// Query for all passes belonging to one owner.
#[derive(Debug, Clone)]
pub struct GetPassesForOwnerQuery {
    pub owner_id: OwnerId,
}

pub struct GetPassesForOwnerHandler {
    registry: Arc<dyn PassRegistry>,
    directory: Arc<dyn UserDirectory>,
}

impl GetPassesForOwnerHandler {
    pub fn new(registry: Arc<dyn PassRegistry>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            registry,
            directory,
        }
    }

    pub async fn handle(&self, query: GetPassesForOwnerQuery) -> Result<Vec<Pass>, DomainError> {
        if self.directory.get_owner(&query.owner_id).await?.is_none() {
            return Err(DomainError::owner_not_found(query.owner_id));
        }
        self.registry.find_for_owner(&query.owner_id).await
    }
}
