//! Payment gateway adapters.

mod adyen;
mod mock;

pub use adyen::{AdyenConfig, AdyenGateway};
pub use mock::MockPaymentGateway;
