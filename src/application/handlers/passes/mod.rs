//! Pass lifecycle handlers: direct issuance, listing, expiry reminders.

mod get_passes_for_owner;
mod issue_pass;
mod notify_expiring;

pub use get_passes_for_owner::{GetPassesForOwnerHandler, GetPassesForOwnerQuery};
pub use issue_pass::{IssuePassCommand, IssuePassHandler};
pub use notify_expiring::{NotifyExpiringPassesHandler, NotifyExpiringResult};
