//! Gateway result codes and their frontend redirect mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a payment as reported by the gateway.
///
/// The gateway's vocabulary is larger than ours; anything we do not act on
/// lands in `Unknown` and redirects the shopper to the error page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultCode {
    /// Payment succeeded; reconcile into a pass.
    Authorised,

    /// Shopper cancelled at their bank.
    Cancelled,

    /// The shopper's bank refused the payment.
    Refused,

    /// Outcome not yet known; intent stays pending.
    Pending,

    /// Gateway received the payment but has not settled it; intent stays
    /// pending.
    Received,

    /// Any other code the gateway sends.
    Unknown(String),
}

impl ResultCode {
    /// Parses a gateway result code string.
    pub fn parse(code: &str) -> Self {
        match code {
            "Authorised" => ResultCode::Authorised,
            "Cancelled" => ResultCode::Cancelled,
            "Refused" => ResultCode::Refused,
            "Pending" => ResultCode::Pending,
            "Received" => ResultCode::Received,
            other => ResultCode::Unknown(other.to_string()),
        }
    }

    /// The frontend result page this code redirects the shopper to.
    pub fn redirect_page(&self) -> RedirectPage {
        match self {
            ResultCode::Authorised => RedirectPage::Success,
            ResultCode::Pending | ResultCode::Received => RedirectPage::Pending,
            ResultCode::Cancelled => RedirectPage::Cancelled,
            ResultCode::Refused => RedirectPage::Failed,
            ResultCode::Unknown(_) => RedirectPage::Error,
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultCode::Authorised => write!(f, "Authorised"),
            ResultCode::Cancelled => write!(f, "Cancelled"),
            ResultCode::Refused => write!(f, "Refused"),
            ResultCode::Pending => write!(f, "Pending"),
            ResultCode::Received => write!(f, "Received"),
            ResultCode::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// The five frontend payment result pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectPage {
    Success,
    Pending,
    Cancelled,
    Failed,
    Error,
}

impl RedirectPage {
    /// Path segment under the frontend's `/PaymentResult/` route.
    pub fn path_segment(&self) -> &'static str {
        match self {
            RedirectPage::Success => "Success",
            RedirectPage::Pending => "Pending",
            RedirectPage::Cancelled => "Cancelled",
            RedirectPage::Failed => "Failed",
            RedirectPage::Error => "Error",
        }
    }
}
