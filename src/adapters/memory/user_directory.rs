//! In-process user directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, OwnerId};
use crate::ports::{Owner, UserDirectory};

/// Directory backed by a process-local map.
///
/// All flag transitions happen under one lock, which is what makes
/// `claim_check_in` a genuine test-and-set and `check_out_all` a single
/// bulk update.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    owners: Mutex<HashMap<OwnerId, Owner>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an owner, replacing any existing entry with the same id.
    pub fn add_owner(&self, owner: Owner) {
        self.owners
            .lock()
            .expect("InMemoryUserDirectory: lock poisoned")
            .insert(owner.id, owner);
    }

    /// Convenience for tests: registers a fresh owner and returns its id.
    pub fn add_new_owner(&self, first_name: &str, email: &str) -> OwnerId {
        let owner = Owner {
            id: OwnerId::new(),
            first_name: first_name.to_string(),
            email: email.to_string(),
            checked_in: false,
        };
        let id = owner.id;
        self.add_owner(owner);
        id
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn get_owner(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError> {
        Ok(self
            .owners
            .lock()
            .expect("InMemoryUserDirectory: lock poisoned")
            .get(id)
            .cloned())
    }

    async fn claim_check_in(&self, id: &OwnerId) -> Result<bool, DomainError> {
        let mut owners = self
            .owners
            .lock()
            .expect("InMemoryUserDirectory: lock poisoned");
        match owners.get_mut(id) {
            Some(owner) if owner.checked_in => Ok(false),
            Some(owner) => {
                owner.checked_in = true;
                Ok(true)
            }
            None => Err(DomainError::owner_not_found(id)),
        }
    }

    async fn check_out_all(&self) -> Result<u64, DomainError> {
        let mut owners = self
            .owners
            .lock()
            .expect("InMemoryUserDirectory: lock poisoned");
        let mut checked_out = 0;
        for owner in owners.values_mut() {
            if owner.checked_in {
                owner.checked_in = false;
                checked_out += 1;
            }
        }
        Ok(checked_out)
    }

    async fn count_checked_in(&self) -> Result<u64, DomainError> {
        Ok(self
            .owners
            .lock()
            .expect("InMemoryUserDirectory: lock poisoned")
            .values()
            .filter(|o| o.checked_in)
            .count() as u64)
    }
}
