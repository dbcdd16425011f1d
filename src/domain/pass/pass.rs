//! Pass aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, OwnerId, PassId, Timestamp};

use super::PassKind;

/// An admission credential with a validity window.
///
/// # Invariants
///
/// - `valid_until >= valid_from`, enforced at construction.
/// - A SingleUse pass carries no separate consumed flag: successful
///   admission sets `valid_until` to the admission time, which both
///   invalidates the pass and records when it was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    /// Unique identifier, presented at the door.
    pub id: PassId,

    /// Owner this pass admits.
    pub owner_id: OwnerId,

    /// Annual or SingleUse.
    pub kind: PassKind,

    /// Start of the validity window.
    pub valid_from: Timestamp,

    /// End of the validity window.
    pub valid_until: Timestamp,

    /// Reference to the owner's photo, shown to the door operator.
    pub photo_ref: String,
}

impl Pass {
    /// Creates a pass with an explicit validity window.
    pub fn new(
        owner_id: OwnerId,
        kind: PassKind,
        valid_from: Timestamp,
        valid_until: Timestamp,
        photo_ref: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if valid_until.is_before(&valid_from) {
            return Err(DomainError::validation(
                "valid_until must not precede valid_from",
            ));
        }
        Ok(Self {
            id: PassId::new(),
            owner_id,
            kind,
            valid_from,
            valid_until,
            photo_ref: photo_ref.into(),
        })
    }

    /// Creates a pass starting now with the standard one-year window.
    ///
    /// Both kinds get the same window; a SingleUse pass is simply consumed
    /// on first admission within it.
    pub fn issue(
        owner_id: OwnerId,
        kind: PassKind,
        photo_ref: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: PassId::new(),
            owner_id,
            kind,
            valid_from: now,
            valid_until: now.add_years(1),
            photo_ref: photo_ref.into(),
        }
    }

    /// Whether the pass had expired as of `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.valid_until.is_before(&now)
    }

    /// Consumes a SingleUse pass at the moment of admission.
    ///
    /// Sets `valid_until = at`; the next verification of this pass reports
    /// "already used" with exactly this timestamp. No-op for Annual passes.
    pub fn consume(&mut self, at: Timestamp) {
        if self.kind == PassKind::SingleUse {
            self.valid_until = at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_validity_window() {
        let now = Timestamp::now();
        let result = Pass::new(
            OwnerId::new(),
            PassKind::Annual,
            now,
            now.add_days(-1),
            "photo-1",
        );
        assert!(result.is_err());
    }

    #[test]
    fn issue_defaults_to_one_year_window() {
        let pass = Pass::issue(OwnerId::new(), PassKind::Annual, "photo-1");
        assert_eq!(pass.valid_until, pass.valid_from.add_years(1));
        assert!(!pass.is_expired(Timestamp::now()));
    }

    #[test]
    fn expiry_is_strict_past() {
        let now = Timestamp::now();
        let pass = Pass::new(OwnerId::new(), PassKind::Annual, now, now, "p").unwrap();
        // A pass whose window ends exactly now is not yet expired.
        assert!(!pass.is_expired(now));
        assert!(pass.is_expired(now.add_days(1)));
    }

    #[test]
    fn consume_sets_valid_until_to_admission_time() {
        let mut pass = Pass::issue(OwnerId::new(), PassKind::SingleUse, "p");
        let at = Timestamp::now();
        pass.consume(at);
        assert_eq!(pass.valid_until, at);
        assert!(pass.is_expired(at.add_days(1)));
    }

    #[test]
    fn consume_leaves_annual_passes_alone() {
        let mut pass = Pass::issue(OwnerId::new(), PassKind::Annual, "p");
        let original_until = pass.valid_until;
        pass.consume(Timestamp::now());
        assert_eq!(pass.valid_until, original_until);
    }
}
