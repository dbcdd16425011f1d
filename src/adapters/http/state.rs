//! Shared HTTP application state.

use std::sync::Arc;

use crate::application::handlers::admission::VerifyPassHandler;
use crate::application::handlers::ledger::{ClearHistoryHandler, GetHistoryHandler};
use crate::application::handlers::passes::{
    GetPassesForOwnerHandler, IssuePassHandler, NotifyExpiringPassesHandler,
};
use crate::application::handlers::payment::{
    GetPaymentMethodsHandler, PurgeStaleIntentsHandler, ReconcileCallbackHandler,
    SubmitPaymentHandler,
};
use crate::domain::occupancy::OccupancyCounter;
use crate::domain::venue::VenueStatusGate;
use crate::ports::{
    CheckInLedger, Notifier, PassRegistry, PaymentGateway, PaymentIntentStore, UserDirectory,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; everything heavy is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn PassRegistry>,
    pub directory: Arc<dyn UserDirectory>,
    pub ledger: Arc<dyn CheckInLedger>,
    pub intents: Arc<dyn PaymentIntentStore>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub notifier: Arc<dyn Notifier>,
    pub occupancy: Arc<OccupancyCounter>,
    pub venue: Arc<VenueStatusGate>,

    /// Client key forwarded to the frontend drop-in component.
    pub gateway_client_key: String,

    /// Frontend base URL for the payment result pages.
    pub frontend_base_url: String,

    /// Our own callback URL, embedded in gateway return URLs.
    pub callback_url: String,
}

impl AppState {
    // Handlers are created on demand from the shared state.

    pub fn verify_pass_handler(&self) -> VerifyPassHandler {
        VerifyPassHandler::new(
            self.registry.clone(),
            self.directory.clone(),
            self.ledger.clone(),
        )
    }

    pub fn issue_pass_handler(&self) -> IssuePassHandler {
        IssuePassHandler::new(self.registry.clone(), self.directory.clone())
    }

    pub fn passes_for_owner_handler(&self) -> GetPassesForOwnerHandler {
        GetPassesForOwnerHandler::new(self.registry.clone(), self.directory.clone())
    }

    pub fn notify_expiring_handler(&self) -> NotifyExpiringPassesHandler {
        NotifyExpiringPassesHandler::new(self.registry.clone(), self.notifier.clone())
    }

    pub fn get_history_handler(&self) -> GetHistoryHandler {
        GetHistoryHandler::new(self.ledger.clone(), self.directory.clone())
    }

    pub fn clear_history_handler(&self) -> ClearHistoryHandler {
        ClearHistoryHandler::new(self.ledger.clone(), self.directory.clone())
    }

    pub fn payment_methods_handler(&self) -> GetPaymentMethodsHandler {
        GetPaymentMethodsHandler::new(self.gateway.clone())
    }

    pub fn submit_payment_handler(&self) -> SubmitPaymentHandler {
        SubmitPaymentHandler::new(
            self.gateway.clone(),
            self.intents.clone(),
            self.callback_url.clone(),
        )
    }

    pub fn reconcile_callback_handler(&self) -> ReconcileCallbackHandler {
        ReconcileCallbackHandler::new(
            self.intents.clone(),
            self.registry.clone(),
            self.gateway.clone(),
            self.notifier.clone(),
        )
    }

    pub fn purge_intents_handler(&self) -> PurgeStaleIntentsHandler {
        PurgeStaleIntentsHandler::new(self.intents.clone())
    }
}
