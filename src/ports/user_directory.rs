//! User directory port.
//!
//! The user profile store is an external collaborator; the core only needs
//! owner resolution and the checked-in flag. The flag transitions here are
//! the concurrency pivot of admission: `claim_check_in` must be a single
//! atomic storage operation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, OwnerId};

/// Directory view of an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Directory identifier.
    pub id: OwnerId,

    /// Given name, used in notifications.
    pub first_name: String,

    /// Contact address for notifications.
    pub email: String,

    /// Whether the owner is currently inside the venue.
    pub checked_in: bool,
}

/// Port for the user directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolves an owner by id.
    async fn get_owner(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError>;

    /// Atomically tests and sets the checked-in flag.
    ///
    /// Returns `Ok(true)` if the owner was not checked in and now is;
    /// `Ok(false)` if the flag was already set. The test and the set are one
    /// storage operation, so two concurrent admissions of the same owner
    /// cannot both observe `false`.
    async fn claim_check_in(&self, id: &OwnerId) -> Result<bool, DomainError>;

    /// Clears the checked-in flag on every owner, as one bulk update.
    ///
    /// Returns the number of owners checked out. Safe to run concurrently
    /// with admissions: individual admissions only ever set the flag.
    async fn check_out_all(&self) -> Result<u64, DomainError>;

    /// Number of owners currently flagged as checked in.
    async fn count_checked_in(&self) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_directory_is_object_safe() {
        fn _accepts_dyn(_directory: &dyn UserDirectory) {}
    }
}
