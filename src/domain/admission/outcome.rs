//! Verification outcomes for door admission.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::pass::PassKind;

/// Result of verifying a presented pass.
///
/// Every variant is a normal return; a denied admission is not an error.
/// The door operator's scanner displays `message()` verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// Admission granted.
    Success,

    /// No pass with the presented id exists.
    InvalidId,

    /// The pass's validity window has ended.
    ///
    /// For a SingleUse pass, expiry *is* the consumption event, so the
    /// message reads "already used" rather than "expired".
    Expired { at: Timestamp, kind: PassKind },

    /// The pass references an owner the directory cannot resolve.
    UnknownOwner,

    /// The owner is already inside.
    AlreadyCheckedIn,
}

impl VerificationOutcome {
    /// Operator-facing message, in Dutch. The exact text is a contract
    /// with the scanner frontend.
    pub fn message(&self) -> String {
        match self {
            VerificationOutcome::Success => "Inchecken gelukt".to_string(),
            VerificationOutcome::InvalidId => "Mislukt - Ongeldige QR code".to_string(),
            VerificationOutcome::Expired { at, kind } => match kind {
                PassKind::SingleUse => {
                    format!("Mislukt - Ticket is al gebruikt op {}", at.format_nl())
                }
                PassKind::Annual => {
                    format!("Mislukt - Ticket is verlopen op {}", at.format_nl())
                }
            },
            VerificationOutcome::UnknownOwner => {
                "Mislukt - Gebruiker niet gevonden".to_string()
            }
            VerificationOutcome::AlreadyCheckedIn => {
                "Mislukt - Gebruiker is al ingecheckt".to_string()
            }
        }
    }

    /// Whether this outcome granted admission.
    pub fn is_success(&self) -> bool {
        matches!(self, VerificationOutcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn ts(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn success_message() {
        assert_eq!(VerificationOutcome::Success.message(), "Inchecken gelukt");
    }

    #[test]
    fn invalid_id_message() {
        assert_eq!(
            VerificationOutcome::InvalidId.message(),
            "Mislukt - Ongeldige QR code"
        );
    }

    #[test]
    fn annual_expiry_message_carries_formatted_date() {
        let outcome = VerificationOutcome::Expired {
            at: ts("2026-02-28T14:05:00Z"),
            kind: PassKind::Annual,
        };
        assert_eq!(
            outcome.message(),
            "Mislukt - Ticket is verlopen op 28/02/2026 om 14:05 uur"
        );
    }

    #[test]
    fn single_use_expiry_reads_as_already_used() {
        let outcome = VerificationOutcome::Expired {
            at: ts("2026-02-28T14:05:00Z"),
            kind: PassKind::SingleUse,
        };
        assert_eq!(
            outcome.message(),
            "Mislukt - Ticket is al gebruikt op 28/02/2026 om 14:05 uur"
        );
    }

    #[test]
    fn owner_messages() {
        assert_eq!(
            VerificationOutcome::UnknownOwner.message(),
            "Mislukt - Gebruiker niet gevonden"
        );
        assert_eq!(
            VerificationOutcome::AlreadyCheckedIn.message(),
            "Mislukt - Gebruiker is al ingecheckt"
        );
    }

    #[test]
    fn only_success_is_success() {
        assert!(VerificationOutcome::Success.is_success());
        assert!(!VerificationOutcome::InvalidId.is_success());
    }
}
