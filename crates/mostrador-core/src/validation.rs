//! # Validation Module
//!
//! Input validation at the boundary, before any mutation logic runs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Frontend (TypeScript)                                     │
//! │  ├── Basic format checks (empty, length)                            │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Engine intent (Rust)                                      │
//! │  └── THIS MODULE: the checks that actually gate state changes       │
//! │                                                                     │
//! │  Deep mutation logic (cart, session) assumes validated input.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Maximum 120 characters
///
/// ## Example
/// ```rust
/// use mostrador_core::validation::validate_customer_name;
///
/// assert!(validate_customer_name("Ana Torres").is_ok());
/// assert!(validate_customer_name("   ").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 120 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 120,
        });
    }

    Ok(())
}

/// Validates a product description.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 200 characters
pub fn validate_product_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// Empty is fine (returns the full grid); just bound the length.
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a sale price in cents.
///
/// ## Rules
/// - Must be non-negative (zero allowed: giveaway items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "salePrice".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock-on-hand count.
///
/// ## Rules
/// - Must be non-negative. Stock is informational during a sale, but a
///   negative count in the catalog is always a data-entry error.
pub fn validate_stock_on_hand(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stockOnHand".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Ana Torres").is_ok());
        assert!(validate_customer_name("  Luis  ").is_ok());

        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_product_description() {
        assert!(validate_product_description("Pan Blanco").is_ok());
        assert!(validate_product_description("").is_err());
        assert!(validate_product_description(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  pan ").unwrap(), "pan");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(2000).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_stock_on_hand() {
        assert!(validate_stock_on_hand(0).is_ok());
        assert!(validate_stock_on_hand(50).is_ok());
        assert!(validate_stock_on_hand(-5).is_err());
    }
}
