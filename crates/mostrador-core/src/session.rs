//! # Sale Session
//!
//! The checkout state machine for one point-of-sale terminal.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Lifecycle                              │
//! │                                                                     │
//! │               add_item                 open_checkout                │
//! │  ┌──────────┐────────►┌──────────┐──────────────►┌────────────────┐ │
//! │  │   Idle   │         │ Building │               │AwaitingPayment │ │
//! │  │ (empty)  │◄────────│(has cart)│◄──────────────│ (modal open)   │ │
//! │  └──────────┘  clear  └──────────┘    cancel     └───────┬────────┘ │
//! │       ▲                                                  │          │
//! │       │                  complete_sale (emits Sale)      │          │
//! │       └──────────────────────────────────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The distinction between `Idle` and `Building` follows the cart: the
//! session re-derives it after every cart mutation. `AwaitingPayment`
//! is entered and left only through the explicit open/cancel/complete
//! intents.
//!
//! The flock of independent dialog flags a typical POS frontend keeps
//! (checkout modal open, customer form open, ...) is deliberately NOT
//! modeled here. The session owns exactly one stage value; pure UI
//! visibility state stays in the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Customer, PaymentMethod, Product, Sale, SaleLine};

// =============================================================================
// Checkout Stage
// =============================================================================

/// Where the session is in the checkout lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStage {
    /// Cart is empty, nothing in progress.
    Idle,
    /// Cart has lines, checkout not yet opened.
    Building,
    /// Checkout opened; payment method and tender being entered.
    AwaitingPayment,
}

impl Default for CheckoutStage {
    fn default() -> Self {
        CheckoutStage::Idle
    }
}

// =============================================================================
// Sale Session
// =============================================================================

/// One terminal's in-progress sale: cart, checkout stage, payment
/// fields, and the optional customer association.
///
/// ## Ownership
/// Exactly one `SaleSession` exists per terminal and it is never shared
/// between tellers. The engine serializes intents with a mutex; the
/// session itself is single-threaded by design and holds no locks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleSession {
    cart: Cart,
    stage: CheckoutStage,
    payment_method: PaymentMethod,
    amount_tendered: Money,
    customer: Option<Customer>,
}

impl SaleSession {
    /// Creates a fresh session: empty cart, cash payment, no customer.
    pub fn new() -> Self {
        SaleSession::default()
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn amount_tendered(&self) -> Money {
        self.amount_tendered
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Change due: tendered minus total.
    ///
    /// May be negative while the tendered amount is still insufficient;
    /// the UI shows it in red. Finalization is what enforces
    /// sufficiency for cash.
    pub fn change(&self) -> Money {
        self.amount_tendered - self.cart.total()
    }

    // -------------------------------------------------------------------------
    // Cart intents
    // -------------------------------------------------------------------------

    /// Adds a product to the cart (merging by product id).
    pub fn add_item(&mut self, product: &Product) {
        self.cart.add_item(product);
        self.sync_stage();
    }

    /// Adjusts a line quantity; clamped at 1, no-op on unknown id.
    pub fn change_quantity(&mut self, product_id: &str, delta: i64) {
        self.cart.change_quantity(product_id, delta);
    }

    /// Removes a line unconditionally.
    pub fn remove_item(&mut self, product_id: &str) {
        self.cart.remove_item(product_id);
        self.sync_stage();
    }

    /// Empties the cart, closes any open checkout, and resets the
    /// tendered amount. The customer association survives.
    ///
    /// Destructive: the caller confirms with the user first.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.amount_tendered = Money::zero();
        self.stage = CheckoutStage::Idle;
    }

    // -------------------------------------------------------------------------
    // Checkout intents
    // -------------------------------------------------------------------------

    /// Opens the checkout. Legal only with a non-empty cart.
    pub fn open_checkout(&mut self) -> CoreResult<()> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        self.stage = CheckoutStage::AwaitingPayment;
        Ok(())
    }

    /// Closes the checkout without touching the cart.
    pub fn cancel_checkout(&mut self) -> CoreResult<()> {
        if self.stage != CheckoutStage::AwaitingPayment {
            return Err(CoreError::CheckoutClosed);
        }
        self.stage = if self.cart.is_empty() {
            CheckoutStage::Idle
        } else {
            CheckoutStage::Building
        };
        Ok(())
    }

    /// Selects the payment method. Legal only while awaiting payment.
    pub fn select_payment_method(&mut self, method: PaymentMethod) -> CoreResult<()> {
        if self.stage != CheckoutStage::AwaitingPayment {
            return Err(CoreError::CheckoutClosed);
        }
        self.payment_method = method;
        Ok(())
    }

    /// Records the cash tendered from free-form cashier input.
    ///
    /// Only meaningful for cash payments; parsing is permissive and
    /// bad input reads as zero rather than failing the intent.
    pub fn set_amount_tendered(&mut self, input: &str) -> CoreResult<()> {
        if self.stage != CheckoutStage::AwaitingPayment {
            return Err(CoreError::CheckoutClosed);
        }
        self.amount_tendered = Money::parse_permissive(input);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Customer intents
    // -------------------------------------------------------------------------

    /// Associates a customer with the sale in progress.
    pub fn set_customer(&mut self, customer: Customer) {
        self.customer = Some(customer);
    }

    /// Clears the association; the sale proceeds as walk-in.
    pub fn remove_customer(&mut self) {
        self.customer = None;
    }

    // -------------------------------------------------------------------------
    // Finalization
    // -------------------------------------------------------------------------

    /// Completes the sale, emitting an immutable `Sale` record and
    /// resetting the session for the next transaction.
    ///
    /// ## Preconditions
    /// - Checkout is open
    /// - Cart is non-empty
    /// - Cash: tendered >= total (exact tender passes)
    ///
    /// On any precondition failure the session is left exactly as it
    /// was, so the cashier can correct and retry.
    ///
    /// The sale id and timestamp come from the caller: this crate
    /// touches no clock and no RNG.
    pub fn complete_sale(
        &mut self,
        sale_id: String,
        completed_at: DateTime<Utc>,
    ) -> CoreResult<Sale> {
        if self.stage != CheckoutStage::AwaitingPayment {
            return Err(CoreError::CheckoutClosed);
        }
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let total = self.cart.total();
        let (tendered_cents, change_cents) = match self.payment_method {
            PaymentMethod::Cash => {
                if self.amount_tendered < total {
                    return Err(CoreError::InsufficientPayment {
                        tendered: self.amount_tendered,
                        total,
                    });
                }
                (
                    Some(self.amount_tendered.cents()),
                    Some((self.amount_tendered - total).cents()),
                )
            }
            // Card and mixed are treated as immediately payable at the
            // external terminal; no tendered amount is modeled.
            PaymentMethod::Card | PaymentMethod::Mixed => (None, None),
        };

        let sale = Sale {
            id: sale_id,
            lines: self.cart.lines.iter().map(SaleLine::from).collect(),
            customer: self.customer.take(),
            payment_method: self.payment_method,
            subtotal_cents: self.cart.subtotal_cents(),
            total_cents: total.cents(),
            tendered_cents,
            change_cents,
            completed_at,
        };

        // Reset for the next transaction.
        self.cart.clear();
        self.payment_method = PaymentMethod::Cash;
        self.amount_tendered = Money::zero();
        self.stage = CheckoutStage::Idle;

        Ok(sale)
    }

    /// Re-derives Idle/Building from the cart. AwaitingPayment is only
    /// left through cancel or complete.
    fn sync_stage(&mut self) {
        if self.stage != CheckoutStage::AwaitingPayment {
            self.stage = if self.cart.is_empty() {
                CheckoutStage::Idle
            } else {
                CheckoutStage::Building
            };
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
