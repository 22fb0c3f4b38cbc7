//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                        │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    Every price, subtotal, tender and change amount in the system    │
//! │    is an i64 number of cents. Only the UI formats it for display.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mostrador_core::money::Money;
//!
//! let price = Money::from_cents(2000); // $20.00
//! let line = price * 2;                // $40.00
//!
//! // Cashier keyboard input is parsed permissively:
//! assert_eq!(Money::parse_permissive("40.00"), line);
//! assert_eq!(Money::parse_permissive("nonsense"), Money::zero());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: change due can be negative while the tendered
///   amount is still insufficient, and the UI displays that in red
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use mostrador_core::money::Money;
    ///
    /// let price = Money::from_cents(4500); // $45.00
    /// assert_eq!(price.cents(), 4500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses free-form cashier input into a Money value.
    ///
    /// ## Permissive by Design
    /// The tendered-amount field on the checkout modal accepts whatever
    /// the cashier types. Empty, malformed, or negative input reads as
    /// zero instead of failing the intent; the insufficiency check at
    /// finalization is the real gate.
    ///
    /// ## Example
    /// ```rust
    /// use mostrador_core::money::Money;
    ///
    /// assert_eq!(Money::parse_permissive("50"), Money::from_cents(5000));
    /// assert_eq!(Money::parse_permissive("41.5"), Money::from_cents(4150));
    /// assert_eq!(Money::parse_permissive(".75"), Money::from_cents(75));
    /// assert_eq!(Money::parse_permissive(""), Money::zero());
    /// assert_eq!(Money::parse_permissive("-10"), Money::zero());
    /// ```
    pub fn parse_permissive(input: &str) -> Money {
        let input = input.trim();
        if input.is_empty() {
            return Money::zero();
        }

        let (major_str, minor_str) = match input.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (input, ""),
        };

        let major: i64 = if major_str.is_empty() {
            0
        } else {
            match major_str.parse() {
                Ok(value) => value,
                Err(_) => return Money::zero(),
            }
        };
        if major < 0 {
            return Money::zero();
        }

        // Minor unit: first two digits, right-padded ("5" reads as 50).
        if !minor_str.chars().all(|c| c.is_ascii_digit()) {
            return Money::zero();
        }
        let mut minor: i64 = 0;
        for (i, c) in minor_str.chars().take(2).enumerate() {
            let digit = (c as u8 - b'0') as i64;
            minor += digit * if i == 0 { 10 } else { 1 };
        }

        Money::from_major_minor(major, minor)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use mostrador_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2000); // $20.00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 4000); // $40.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for debugging and logs. The engine's `EngineConfig` formats
/// amounts for receipts with the configured currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(4550);
        assert_eq!(money.cents(), 4550);
        assert_eq!(money.major(), 45);
        assert_eq!(money.minor(), 50);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_change_can_be_negative() {
        // Tendered $30.00 against a $41.00 total shows -$11.00 until
        // the cashier enters enough cash.
        let tendered = Money::from_cents(3000);
        let total = Money::from_cents(4100);
        let change = tendered - total;
        assert!(change.is_negative());
        assert_eq!(change.cents(), -1100);
    }

    #[test]
    fn test_parse_permissive_valid() {
        assert_eq!(Money::parse_permissive("40.00").cents(), 4000);
        assert_eq!(Money::parse_permissive("50").cents(), 5000);
        assert_eq!(Money::parse_permissive("41.5").cents(), 4150);
        assert_eq!(Money::parse_permissive(".75").cents(), 75);
        assert_eq!(Money::parse_permissive("  20.25  ").cents(), 2025);
        // Extra precision is truncated, never rounded up
        assert_eq!(Money::parse_permissive("10.999").cents(), 1099);
    }

    #[test]
    fn test_parse_permissive_garbage_reads_as_zero() {
        assert_eq!(Money::parse_permissive(""), Money::zero());
        assert_eq!(Money::parse_permissive("   "), Money::zero());
        assert_eq!(Money::parse_permissive("abc"), Money::zero());
        assert_eq!(Money::parse_permissive("12.3x"), Money::zero());
        assert_eq!(Money::parse_permissive("-10"), Money::zero());
        assert_eq!(Money::parse_permissive("-10.50"), Money::zero());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(2000);
        assert_eq!(unit_price.multiply_quantity(2).cents(), 4000);
        assert_eq!(unit_price.multiply_quantity(0).cents(), 0);
    }
}
