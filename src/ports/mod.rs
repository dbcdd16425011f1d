//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `PassRegistry` - pass storage
//! - `CheckInLedger` - append-only admission history
//! - `PaymentIntentStore` - pending payment intents
//!
//! ## Collaborator Ports
//!
//! - `UserDirectory` - owner resolution and the checked-in flag
//! - `PaymentGateway` - external checkout API
//! - `Notifier` - owner notifications

mod check_in_ledger;
mod intent_store;
mod notifier;
mod pass_registry;
mod payment_gateway;
mod user_directory;

pub use check_in_ledger::CheckInLedger;
pub use intent_store::PaymentIntentStore;
pub use notifier::Notifier;
pub use pass_registry::PassRegistry;
pub use payment_gateway::{
    DetailsResponse, GatewayAction, GatewayError, PaymentGateway, PaymentResponse,
    SubmitPaymentRequest,
};
pub use user_directory::{Owner, UserDirectory};
