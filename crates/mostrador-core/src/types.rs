//! # Domain Types
//!
//! Core domain types used throughout Mostrador POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │    Customer    │   │      Sale      │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id            │   │  name          │   │  id (UUID)     │      │
//! │  │  barcode       │   │  phone?        │   │  lines         │      │
//! │  │  description   │   └────────────────┘   │  method        │      │
//! │  │  sale_price    │                        │  change_cents  │      │
//! │  │  stock_on_hand │   ┌────────────────┐   │  completed_at  │      │
//! │  └────────────────┘   │ PaymentMethod  │   └────────────────┘      │
//! │                       │  Cash│Card│Mix │                           │
//! │                       └────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog owns `Product`; the cart never reads a live price after
//! the add. `Sale` is an immutable record emitted once at finalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: String,

    /// Barcode as scanned at the register. May be unset for loose goods.
    pub barcode: Option<String>,

    /// Display name shown to the cashier and on the receipt.
    pub description: String,

    /// Sale price in cents. Snapshotted into the cart line on add.
    pub sale_price_cents: i64,

    /// Purchase cost in cents (margin reporting only, never sale math).
    pub purchase_price_cents: Option<i64>,

    /// Optional category for the admin catalog grid.
    pub category: Option<String>,

    /// Current stock level. Informational during a sale: adding beyond
    /// stock is allowed, the engine only logs a warning.
    pub stock_on_hand: i64,
}

impl Product {
    /// Returns the sale price as a Money type.
    #[inline]
    pub fn sale_price(&self) -> Money {
        Money::from_cents(self.sale_price_cents)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer optionally associated with the sale in progress.
///
/// A sale with no customer is a walk-in ("Mostrador") sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    /// Full name. Never empty; validated at the boundary.
    pub name: String,

    /// Contact phone number.
    pub phone: Option<String>,
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays at checkout.
///
/// Only `Cash` computes change from a tendered amount. `Card` and
/// `Mixed` are treated as immediately payable at the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on external terminal.
    Card,
    /// Part cash, part card. No tendered breakdown is modeled yet.
    Mixed,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

// =============================================================================
// Sale Line
// =============================================================================

/// A line item on a completed sale.
/// Uses snapshot pattern to freeze cart data at time of finalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleLine {
    pub product_id: String,
    /// Product description at time of sale (frozen).
    pub description: String,
    /// Unit price in cents at time of add (frozen).
    pub unit_price_cents: i64,
    /// Quantity sold.
    pub quantity: i64,
    /// Line total (unit_price × quantity).
    pub line_total_cents: i64,
}

impl From<&CartLine> for SaleLine {
    fn from(line: &CartLine) -> Self {
        SaleLine {
            product_id: line.product_id.clone(),
            description: line.description.clone(),
            unit_price_cents: line.unit_price_cents,
            quantity: line.quantity,
            line_total_cents: line.line_total_cents(),
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A completed sale transaction.
///
/// Created only by a successful finalization; never mutated afterwards.
/// `tendered_cents` and `change_cents` are present for cash payments
/// and absent for card/mixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sale {
    pub id: String,
    pub lines: Vec<SaleLine>,
    pub customer: Option<Customer>,
    pub payment_method: PaymentMethod,
    pub subtotal_cents: i64,
    /// Equal to the subtotal: no tax or discount is modeled.
    pub total_cents: i64,
    pub tendered_cents: Option<i64>,
    pub change_cents: Option<i64>,
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

impl Sale {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the change due as Money (zero for card/mixed payments).
    #[inline]
    pub fn change(&self) -> Money {
        Money::from_cents(self.change_cents.unwrap_or(0))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
