//! Payment gateway configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Payment gateway (Adyen) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Checkout API key
    pub api_key: String,

    /// Merchant account the payments book to
    pub merchant_account: String,

    /// Client key, forwarded to the frontend drop-in component
    pub client_key: String,

    /// Checkout API base URL; defaults to the test environment
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Frontend base URL for the payment result pages
    #[serde(default = "default_frontend_base_url")]
    pub frontend_base_url: String,
}

impl GatewayConfig {
    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingGatewayKey);
        }
        if self.merchant_account.is_empty() {
            return Err(ValidationError::MissingMerchantAccount);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidGatewayTimeout);
        }
        if !self.frontend_base_url.starts_with("http") {
            return Err(ValidationError::InvalidFrontendUrl);
        }
        Ok(())
    }
}

fn default_api_base_url() -> String {
    "https://checkout-test.adyen.com/v68".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_frontend_base_url() -> String {
    "http://localhost:3000".to_string()
}
