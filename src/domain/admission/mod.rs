//! Admission domain module.
//!
//! The five mutually exclusive outcomes of presenting a pass at the door.

mod outcome;

pub use outcome::VerificationOutcome;
