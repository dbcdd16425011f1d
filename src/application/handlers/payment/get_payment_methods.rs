//! GetPaymentMethodsHandler - Query handler for the checkout method selector.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::foundation::DomainError;
use crate::domain::pass::PassKind;
use crate::ports::PaymentGateway;

/// Query for the methods available to pay for one kind of pass.
#[derive(Debug, Clone)]
pub struct GetPaymentMethodsQuery {
    pub kind: PassKind,
}

pub struct GetPaymentMethodsHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl GetPaymentMethodsHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    /// Returns the gateway's method-selector payload, forwarded to the
    /// frontend drop-in component untouched.
    pub async fn handle(&self, query: GetPaymentMethodsQuery) -> Result<Value, DomainError> {
        let amount = query.kind.price();
        let methods = self.gateway.available_methods(&amount).await?;
        Ok(methods)
    }
}
