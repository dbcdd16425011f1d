//! Venue status gate.
//!
//! A single Open/Closed flag, toggled manually from the operator console.
//! Closing the venue checks everyone out; opening has no side effect.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::domain::foundation::DomainError;
use crate::domain::occupancy::OccupancyCounter;

/// Whether the venue is admitting visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueStatus {
    Open,
    Closed,
}

impl VenueStatus {
    /// Wire representation, as the status endpoint returns it.
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueStatus::Open => "open",
            VenueStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for VenueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Process-wide venue status with its close side effect.
///
/// The venue starts closed. Toggles are serialized; the mass checkout on
/// close runs inside the toggle's critical section so two rapid toggles
/// cannot skip it.
pub struct VenueStatusGate {
    status: Mutex<VenueStatus>,
    occupancy: Arc<OccupancyCounter>,
}

impl VenueStatusGate {
    pub fn new(occupancy: Arc<OccupancyCounter>) -> Self {
        Self {
            status: Mutex::new(VenueStatus::Closed),
            occupancy,
        }
    }

    /// Current status.
    pub async fn current(&self) -> VenueStatus {
        *self.status.lock().await
    }

    /// Flips the status.
    ///
    /// Open → Closed additionally resets occupancy (mass checkout).
    /// Closed → Open only flips the flag.
    pub async fn toggle(&self) -> Result<VenueStatus, DomainError> {
        let mut status = self.status.lock().await;
        let next = match *status {
            VenueStatus::Closed => VenueStatus::Open,
            VenueStatus::Open => VenueStatus::Closed,
        };
        *status = next;
        if next == VenueStatus::Closed {
            self.occupancy.reset_on_venue_close().await?;
        }
        tracing::info!(status = %next, "venue status changed");
        Ok(next)
    }
}
