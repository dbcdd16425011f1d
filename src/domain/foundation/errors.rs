//! Error types for the domain layer.
//!
//! Verification outcomes are NOT errors; they are typed results the door
//! operator consumes directly. `DomainError` covers genuine failures:
//! missing records, gateway trouble, malformed requests, storage faults.

use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    PassNotFound,
    OwnerNotFound,
    IntentNotFound,

    // Upstream errors
    UpstreamFailure,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::PassNotFound => "PASS_NOT_FOUND",
            ErrorCode::OwnerNotFound => "OWNER_NOT_FOUND",
            ErrorCode::IntentNotFound => "INTENT_NOT_FOUND",
            ErrorCode::UpstreamFailure => "UPSTREAM_FAILURE",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Creates a pass-not-found error.
    pub fn pass_not_found(id: impl fmt::Display) -> Self {
        Self::new(ErrorCode::PassNotFound, format!("Pass {} not found", id))
    }

    /// Creates an owner-not-found error.
    pub fn owner_not_found(id: impl fmt::Display) -> Self {
        Self::new(ErrorCode::OwnerNotFound, format!("Owner {} not found", id))
    }

    /// Creates an intent-not-found error.
    pub fn intent_not_found(order_ref: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::IntentNotFound,
            format!("No pending payment for order {}", order_ref),
        )
    }

    /// Creates an upstream failure (gateway unreachable, timed out, or
    /// answered with a protocol error).
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamFailure, message)
    }

    /// Creates a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_message() {
        let err = DomainError::validation("kind must be year or one-time");
        assert_eq!(
            err.to_string(),
            "[VALIDATION_FAILED] kind must be year or one-time"
        );
    }

    #[test]
    fn constructors_set_expected_codes() {
        assert_eq!(
            DomainError::upstream("gateway timed out").code,
            ErrorCode::UpstreamFailure
        );
        assert_eq!(DomainError::storage("lost").code, ErrorCode::StorageError);
        assert_eq!(
            DomainError::pass_not_found("abc").code,
            ErrorCode::PassNotFound
        );
    }
}
