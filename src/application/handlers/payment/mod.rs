//! Payment reconciliation handlers.

mod get_payment_methods;
mod purge_stale_intents;
mod reconcile_callback;
mod submit_payment;

pub use get_payment_methods::{GetPaymentMethodsHandler, GetPaymentMethodsQuery};
pub use purge_stale_intents::{PurgeStaleIntentsCommand, PurgeStaleIntentsHandler};
pub use reconcile_callback::{
    ReconcileCallbackCommand, ReconcileCallbackHandler, ReconcileCallbackResult,
};
pub use submit_payment::{SubmitPaymentCommand, SubmitPaymentHandler, SubmitPaymentResult};
