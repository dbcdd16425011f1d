//! In-process implementations of the storage and directory ports.
//!
//! The production document store is an external collaborator; these
//! adapters hold the same contracts in process-local maps. They double as
//! the test fixtures for handler and HTTP tests.

mod check_in_ledger;
mod intent_store;
mod pass_registry;
mod user_directory;

pub use check_in_ledger::InMemoryCheckInLedger;
pub use intent_store::InMemoryIntentStore;
pub use pass_registry::InMemoryPassRegistry;
pub use user_directory::InMemoryUserDirectory;
