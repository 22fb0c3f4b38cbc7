//! # API Error Type
//!
//! Unified error type for engine intents.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Error Flow in Mostrador POS                        │
//! │                                                                     │
//! │  Frontend                      Engine                               │
//! │  ────────                      ──────                               │
//! │                                                                     │
//! │  completeSale intent                                                │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │  SaleEngine method: Result<Snapshot, ApiError>                │  │
//! │  │                                                               │  │
//! │  │  CoreError::InsufficientPayment ──► INSUFFICIENT_PAYMENT ───► │  │
//! │  │  ValidationError::Required ───────► VALIDATION_ERROR ───────► │  │
//! │  │  catalog miss ────────────────────► NOT_FOUND ──────────────► │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │                                                                     │
//! │  Frontend shows the message as a transient toast and re-prompts;    │
//! │  the session state is unchanged, nothing aborts.                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use mostrador_core::{CoreError, ValidationError};

/// API error returned from engine intents.
///
/// ## Serialization
/// This is what the frontend receives when an intent fails:
/// ```json
/// {
///   "code": "INSUFFICIENT_PAYMENT",
///   "message": "Insufficient payment: tendered $30.00, total $41.00"
/// }
/// ```
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Lookup miss on catalog or customer directory
    NotFound,

    /// Input validation failed (empty name, bad query, ...)
    ValidationError,

    /// Cash tendered below the total at finalization
    InsufficientPayment,

    /// Intent illegal in the current checkout stage
    InvalidStage,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts checkout state machine errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InsufficientPayment { .. } => ErrorCode::InsufficientPayment,
            CoreError::EmptyCart | CoreError::CheckoutClosed => ErrorCode::InvalidStage,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts boundary validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use mostrador_core::Money;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::InsufficientPayment {
            tendered: Money::from_cents(3000),
            total: Money::from_cents(4100),
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientPayment);
        assert!(err.message.contains("$30.00"));

        let err: ApiError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::InvalidStage);
    }

    #[test]
    fn test_validation_error_mapping() {
        let err: ApiError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_not_found_helper() {
        let err = ApiError::not_found("Product", "99");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 99");
    }
}
