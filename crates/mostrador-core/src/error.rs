//! # Error Types
//!
//! Domain-specific error types for mostrador-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  mostrador-core errors (this file)                                  │
//! │  ├── CoreError        - Checkout state machine violations           │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  mostrador-engine errors (separate crate)                           │
//! │  └── ApiError         - What the frontend sees (serialized)         │
//! │                                                                     │
//! │  Flow: CoreError / ValidationError → ApiError → Frontend toast      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is recoverable: the session state is left untouched
//! and the caller re-prompts the cashier. There is no fatal failure mode
//! in this core.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout state machine errors.
///
/// Raised when a presentation intent arrives in a stage that does not
/// permit it, or when finalization preconditions fail.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cash tendered is less than the total due at finalization.
    ///
    /// ## When This Occurs
    /// - `complete_sale` with method Cash and tendered < total
    ///
    /// The change display may already show a negative amount; this error
    /// is what actually blocks the sale.
    #[error("Insufficient payment: tendered {tendered}, total {total}")]
    InsufficientPayment { tendered: Money, total: Money },

    /// The cart has no lines.
    ///
    /// ## When This Occurs
    /// - Opening the checkout modal with nothing in the cart
    /// - Completing a sale whose cart was emptied under the open modal
    #[error("Cart is empty")]
    EmptyCart,

    /// A payment intent arrived while the checkout modal is closed.
    ///
    /// Payment method selection, tendered-amount entry, and cancellation
    /// are only legal while the session is awaiting payment.
    #[error("Checkout is not open")]
    CheckoutClosed,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input does not meet requirements. Validation
/// happens at the boundary, before the state machine runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientPayment {
            tendered: Money::from_cents(3000),
            total: Money::from_cents(4100),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient payment: tendered $30.00, total $41.00"
        );

        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
        assert_eq!(CoreError::CheckoutClosed.to_string(), "Checkout is not open");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "description".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "description must be at most 200 characters");
    }
}
