//! Pass domain module.
//!
//! A pass is the admission credential: Annual or SingleUse, with a
//! validity window and a photo reference for the door operator.

mod kind;
#[allow(clippy::module_inception)]
mod pass;

pub use kind::{Amount, PassKind};
pub use pass::Pass;
