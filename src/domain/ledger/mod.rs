//! Check-in ledger domain module.
//!
//! Append-only history of admissions. Records are immutable except for the
//! `visible` flag, which the owner can clear; aggregate consumers read the
//! ledger ignoring that flag, so history is never actually lost.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CheckInId, OwnerId, Timestamp};

/// One admission event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInRecord {
    /// Unique identifier of this record.
    pub id: CheckInId,

    /// Owner who was admitted.
    pub owner_id: OwnerId,

    /// When the admission happened.
    pub timestamp: Timestamp,

    /// Whether the record shows up in the owner's personal history.
    /// Cleared by `clear_history`; ignored by aggregate queries.
    pub visible: bool,
}

impl CheckInRecord {
    /// Creates a visible record for an admission happening now.
    pub fn new(owner_id: OwnerId, timestamp: Timestamp) -> Self {
        Self {
            id: CheckInId::new(),
            owner_id,
            timestamp,
            visible: true,
        }
    }
}
