//! # Cart
//!
//! The in-progress, mutable collection of line items for the current
//! sale.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                               │
//! │                                                                     │
//! │  Frontend Action          Engine Intent           Cart Change       │
//! │  ───────────────          ─────────────           ───────────       │
//! │                                                                     │
//! │  Click product ──────────► add_item ────────────► merge or insert   │
//! │                                                                     │
//! │  +/- buttons ────────────► change_quantity ─────► clamp at 1        │
//! │                                                                     │
//! │  Trash icon ─────────────► remove_item ─────────► delete line       │
//! │                                                                     │
//! │  "Cancelar" (confirmed) ─► clear ───────────────► empty cart        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id; re-adding merges into the line
//! - `quantity >= 1` always; the +/- buttons can never remove a line,
//!   only the explicit remove intent can
//! - `unit_price_cents` is frozen at add time so a catalog price edit
//!   mid-sale never shifts the ticket

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// One product entry in the cart.
///
/// Holds a denormalized copy of the description and price taken when
/// the product was first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product ID this line references.
    pub product_id: String,

    /// Description at time of adding (frozen).
    pub description: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a new cart line from a product, freezing its price.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id.clone(),
            description: product.description.clone(),
            unit_price_cents: product.sale_price_cents,
            quantity: 1,
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Line total as Money.
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered collection of lines, keyed by product
/// id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity += 1, price untouched
    /// - Product not in cart: new line with quantity 1 and the price
    ///   frozen from the catalog
    ///
    /// Stock is not checked here; the engine logs when a line exceeds
    /// the stock on hand.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine::from_product(product));
    }

    /// Adjusts a line's quantity by a signed delta, clamped at 1.
    ///
    /// ## Behavior
    /// - New quantity is `max(1, quantity + delta)`: the decrement
    ///   button bottoms out at 1 instead of removing the line
    /// - Unknown product id: silent no-op, the cart is unchanged
    pub fn change_quantity(&mut self, product_id: &str, delta: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = (line.quantity + delta).max(1);
        }
    }

    /// Removes a line by product id. Idempotent: removing a product
    /// that is not in the cart does nothing.
    pub fn remove_item(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Empties the cart.
    ///
    /// Destructive: callers obtain user confirmation first. This method
    /// never blocks waiting for one.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Looks up a line by product id.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Returns the number of unique lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the subtotal.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// Calculates the total due. Equal to the subtotal: no tax or
    /// discount is modeled.
    pub fn total_cents(&self) -> i64 {
        self.subtotal_cents()
    }

    /// Total due as Money.
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
