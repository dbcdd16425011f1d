//! Check-in ledger handlers.

mod clear_history;
mod get_history;

pub use clear_history::{ClearHistoryCommand, ClearHistoryHandler};
pub use get_history::{GetHistoryHandler, GetHistoryQuery};
