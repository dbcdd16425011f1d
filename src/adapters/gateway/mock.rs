//! Mock payment gateway for testing.
//!
//! Configurable responses, error injection, and a call log for assertions.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

use crate::domain::pass::Amount;
use crate::domain::payment::ResultCode;
use crate::ports::{
    DetailsResponse, GatewayAction, GatewayError, PaymentGateway, PaymentResponse,
    SubmitPaymentRequest,
};

/// Internal mutable state.
struct MockState {
    methods_response: Value,
    next_payment_response: Option<PaymentResponse>,
    next_details_code: ResultCode,
    next_error: Option<GatewayError>,
    call_log: Vec<String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            methods_response: json!({ "paymentMethods": [{ "type": "ideal" }] }),
            next_payment_response: None,
            next_details_code: ResultCode::Authorised,
            next_error: None,
            call_log: Vec::new(),
        }
    }
}

/// Mock gateway with scripted responses.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned (test-only adapter).
#[derive(Default)]
pub struct MockPaymentGateway {
    inner: Mutex<MockState>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the next `submit_payment` response to demand a redirect.
    pub fn redirecting(payment_data: &str) -> Self {
        let mock = Self::new();
        mock.set_payment_response(PaymentResponse {
            result_code: ResultCode::Pending,
            action: Some(GatewayAction {
                payment_data: payment_data.to_string(),
                raw: json!({ "type": "redirect", "paymentData": payment_data }),
            }),
        });
        mock
    }

    /// Sets the response for the next `submit_payment` call.
    pub fn set_payment_response(&self, response: PaymentResponse) {
        self.inner
            .lock()
            .expect("MockPaymentGateway: lock poisoned")
            .next_payment_response = Some(response);
    }

    /// Sets the result code for subsequent `submit_details` calls.
    pub fn set_details_code(&self, code: ResultCode) {
        self.inner
            .lock()
            .expect("MockPaymentGateway: lock poisoned")
            .next_details_code = code;
    }

    /// Injects an error to return on the next call.
    pub fn set_error(&self, error: GatewayError) {
        self.inner
            .lock()
            .expect("MockPaymentGateway: lock poisoned")
            .next_error = Some(error);
    }

    /// Names of the methods called, in order.
    pub fn calls(&self) -> Vec<String> {
        self.inner
            .lock()
            .expect("MockPaymentGateway: lock poisoned")
            .call_log
            .clone()
    }

    fn record(&self, method: &str) -> Result<(), GatewayError> {
        let mut state = self.inner.lock().expect("MockPaymentGateway: lock poisoned");
        state.call_log.push(method.to_string());
        match state.next_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn available_methods(&self, _amount: &Amount) -> Result<Value, GatewayError> {
        self.record("available_methods")?;
        Ok(self
            .inner
            .lock()
            .expect("MockPaymentGateway: lock poisoned")
            .methods_response
            .clone())
    }

    async fn submit_payment(
        &self,
        _request: SubmitPaymentRequest,
    ) -> Result<PaymentResponse, GatewayError> {
        self.record("submit_payment")?;
        let scripted = self
            .inner
            .lock()
            .expect("MockPaymentGateway: lock poisoned")
            .next_payment_response
            .take();
        Ok(scripted.unwrap_or(PaymentResponse {
            result_code: ResultCode::Authorised,
            action: None,
        }))
    }

    async fn submit_details(
        &self,
        _details: Value,
        _payment_data: &str,
    ) -> Result<DetailsResponse, GatewayError> {
        self.record("submit_details")?;
        let code = self
            .inner
            .lock()
            .expect("MockPaymentGateway: lock poisoned")
            .next_details_code
            .clone();
        Ok(DetailsResponse {
            result_code: code,
            psp_reference: Some("mock-psp-ref".to_string()),
        })
    }
}
