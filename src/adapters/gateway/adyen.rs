//! Adyen checkout gateway adapter.
//!
//! Implements the `PaymentGateway` trait against the Adyen Checkout API.
//! Payments are restricted to iDEAL for Dutch shoppers, which is all the
//! venue sells through.
//!
//! # Transport
//!
//! Every call carries the configured timeout, and transport failures are
//! retried exactly once before surfacing as `GatewayError::Unreachable`.
//! The gateway is never retried on a delivered-but-rejected response; a
//! charge must not be resubmitted blindly.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};
use std::time::Duration;

use crate::domain::pass::Amount;
use crate::domain::payment::ResultCode;
use crate::ports::{
    DetailsResponse, GatewayAction, GatewayError, PaymentGateway, PaymentResponse,
    SubmitPaymentRequest,
};

/// Adyen API configuration.
#[derive(Clone)]
pub struct AdyenConfig {
    /// Checkout API key.
    api_key: SecretString,

    /// Merchant account the payments book to.
    merchant_account: String,

    /// Base URL of the checkout API (test or live).
    api_base_url: String,

    /// Per-request timeout.
    timeout: Duration,
}

impl AdyenConfig {
    /// Create a configuration against the test environment.
    pub fn new(api_key: impl Into<String>, merchant_account: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            merchant_account: merchant_account.into(),
            api_base_url: "https://checkout-test.adyen.com/v68".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Set a custom API base URL (live endpoint, or a stub in tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Adyen checkout adapter.
pub struct AdyenGateway {
    config: AdyenConfig,
    http_client: reqwest::Client,
}

impl AdyenGateway {
    pub fn new(config: AdyenConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("reqwest client construction cannot fail with these options");
        Self {
            config,
            http_client,
        }
    }

    /// POSTs a JSON body, retrying once on transport failure.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, GatewayError> {
        let url = format!("{}{}", self.config.api_base_url, path);

        let mut last_err = None;
        for attempt in 0..2 {
            let result = self
                .http_client
                .post(&url)
                .header("X-API-Key", self.config.api_key.expose_secret())
                .json(body)
                .send()
                .await;

            match result {
                Ok(response) => {
                    let status = response.status();
                    let payload: Value = response.json().await.map_err(|e| {
                        GatewayError::Protocol(format!("unparseable response: {}", e))
                    })?;
                    if status.is_success() {
                        return Ok(payload);
                    }
                    let message = payload["message"]
                        .as_str()
                        .unwrap_or("no message")
                        .to_string();
                    return Err(
                        if status == reqwest::StatusCode::UNAUTHORIZED
                            || status == reqwest::StatusCode::FORBIDDEN
                        {
                            GatewayError::Rejected(message)
                        } else {
                            GatewayError::Protocol(format!("HTTP {}: {}", status, message))
                        },
                    );
                }
                Err(err) => {
                    tracing::warn!(attempt, error = %err, "gateway request failed");
                    last_err = Some(err);
                }
            }
        }

        Err(GatewayError::Unreachable(
            last_err.map(|e| e.to_string()).unwrap_or_default(),
        ))
    }
}

/// Extracts a `PaymentResponse` from the raw `/payments` payload.
fn parse_payment_response(payload: Value) -> Result<PaymentResponse, GatewayError> {
    let result_code = payload["resultCode"]
        .as_str()
        .map(ResultCode::parse)
        .ok_or_else(|| GatewayError::Protocol("response missing resultCode".to_string()))?;

    let action = match &payload["action"] {
        Value::Null => None,
        raw => {
            let payment_data = raw["paymentData"]
                .as_str()
                .ok_or_else(|| {
                    GatewayError::Protocol("action missing paymentData".to_string())
                })?
                .to_string();
            Some(GatewayAction {
                payment_data,
                raw: raw.clone(),
            })
        }
    };

    Ok(PaymentResponse {
        result_code,
        action,
    })
}

/// Extracts a `DetailsResponse` from the raw `/payments/details` payload.
fn parse_details_response(payload: Value) -> Result<DetailsResponse, GatewayError> {
    let result_code = payload["resultCode"]
        .as_str()
        .map(ResultCode::parse)
        .ok_or_else(|| GatewayError::Protocol("response missing resultCode".to_string()))?;

    Ok(DetailsResponse {
        result_code,
        psp_reference: payload["pspReference"].as_str().map(str::to_string),
    })
}

#[async_trait]
impl PaymentGateway for AdyenGateway {
    async fn available_methods(&self, amount: &Amount) -> Result<Value, GatewayError> {
        // iDEAL only; the venue's shoppers are Dutch.
        let body = json!({
            "merchantAccount": self.config.merchant_account,
            "allowedPaymentMethods": ["ideal"],
            "countryCode": "NL",
            "shopperLocale": "nl-NL",
            "amount": amount,
            "channel": "Web",
        });
        self.post_json("/paymentMethods", &body).await
    }

    async fn submit_payment(
        &self,
        request: SubmitPaymentRequest,
    ) -> Result<PaymentResponse, GatewayError> {
        let body = json!({
            "merchantAccount": self.config.merchant_account,
            "paymentMethod": request.payment_method,
            "amount": request.amount,
            "reference": request.reference,
            "returnUrl": request.return_url,
        });
        let payload = self.post_json("/payments", &body).await?;
        parse_payment_response(payload)
    }

    async fn submit_details(
        &self,
        details: Value,
        payment_data: &str,
    ) -> Result<DetailsResponse, GatewayError> {
        let body = json!({
            "details": details,
            "paymentData": payment_data,
        });
        let payload = self.post_json("/payments/details", &body).await?;
        parse_details_response(payload)
    }
}
