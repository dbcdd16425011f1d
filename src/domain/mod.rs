//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, time, errors)
//! - `pass` - Admission credentials and their validity rules
//! - `admission` - Door verification outcomes
//! - `ledger` - Append-only check-in history records
//! - `payment` - Pending intents and gateway result codes
//! - `occupancy` - Process-wide visitor counting with bounded adjustment
//! - `venue` - Open/Closed gate and its close side effect

pub mod admission;
pub mod foundation;
pub mod ledger;
pub mod occupancy;
pub mod pass;
pub mod payment;
pub mod venue;
