//! Admission command handlers.

mod verify_pass;

pub use verify_pass::{VerifyPassCommand, VerifyPassHandler};
