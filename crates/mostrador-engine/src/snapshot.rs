//! # Snapshot DTOs
//!
//! Immutable views of engine state for the presentation layer.
//!
//! ## Why DTOs?
//! - Decouples the internal domain model from the API contract
//! - Handles serde rename to camelCase for JS consumption
//! - Every field the frontend renders is precomputed here; the UI does
//!   no money math of its own
//!
//! The frontend re-renders from whatever snapshot the last intent
//! returned; it never holds a reference into engine state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mostrador_core::{Cart, CartLine, CheckoutStage, Customer, PaymentMethod, Product, SaleSession};

// =============================================================================
// Product View
// =============================================================================

/// Product DTO for the search grid.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub barcode: Option<String>,
    pub description: String,
    pub sale_price_cents: i64,
    pub stock_on_hand: i64,
}

impl From<&Product> for ProductView {
    fn from(p: &Product) -> Self {
        ProductView {
            id: p.id.clone(),
            barcode: p.barcode.clone(),
            description: p.description.clone(),
            sale_price_cents: p.sale_price_cents,
            stock_on_hand: p.stock_on_hand,
        }
    }
}

// =============================================================================
// Cart Views
// =============================================================================

/// One cart line as rendered in the cart panel.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: String,
    pub description: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        CartLineView {
            product_id: line.product_id.clone(),
            description: line.description.clone(),
            unit_price_cents: line.unit_price_cents,
            quantity: line.quantity,
            line_total_cents: line.line_total_cents(),
        }
    }
}

/// Cart totals summary.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
            total_cents: cart.total_cents(),
        }
    }
}

// =============================================================================
// Customer View
// =============================================================================

/// Customer as shown in the checkout modal.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub name: String,
    pub phone: Option<String>,
}

impl From<&Customer> for CustomerView {
    fn from(c: &Customer) -> Self {
        CustomerView {
            name: c.name.clone(),
            phone: c.phone.clone(),
        }
    }
}

// =============================================================================
// Session View
// =============================================================================

/// Full session snapshot: everything the POS screen and the checkout
/// modal render.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub lines: Vec<CartLineView>,
    pub totals: CartTotals,
    pub stage: CheckoutStage,
    pub payment_method: PaymentMethod,
    pub amount_tendered_cents: i64,
    /// Tendered minus total. Negative while insufficient; the modal
    /// shows it in red but only finalization enforces it.
    pub change_cents: i64,
    pub customer: Option<CustomerView>,
}

impl From<&SaleSession> for SessionView {
    fn from(session: &SaleSession) -> Self {
        SessionView {
            lines: session.cart().lines.iter().map(CartLineView::from).collect(),
            totals: CartTotals::from(session.cart()),
            stage: session.stage(),
            payment_method: session.payment_method(),
            amount_tendered_cents: session.amount_tendered().cents(),
            change_cents: session.change().cents(),
            customer: session.customer().map(CustomerView::from),
        }
    }
}

// =============================================================================
// Receipt View
// =============================================================================

/// One line on the printed/displayed receipt.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub description: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

/// The receipt produced by a completed sale.
///
/// `customer_name` is always present: walk-in sales carry the
/// configured label ("Mostrador") instead of a blank.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptView {
    pub sale_id: String,
    pub store_name: String,
    pub timestamp: String,
    pub customer_name: String,
    pub lines: Vec<ReceiptLine>,
    pub subtotal_cents: i64,
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
    pub tendered_cents: Option<i64>,
    pub change_cents: Option<i64>,
    /// Total preformatted for display, e.g. "$41.00".
    pub total_display: String,
    /// Change preformatted for display; "$0.00" for card/mixed.
    pub change_display: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mostrador_core::Product;

    #[test]
    fn test_session_view_reflects_cart() {
        let product = Product {
            id: "1".to_string(),
            barcode: Some("1".to_string()),
            description: "Pan Blanco".to_string(),
            sale_price_cents: 2000,
            purchase_price_cents: None,
            category: None,
            stock_on_hand: 50,
        };

        let mut session = SaleSession::new();
        session.add_item(&product);
        session.add_item(&product);

        let view = SessionView::from(&session);
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.lines[0].line_total_cents, 4000);
        assert_eq!(view.totals.subtotal_cents, 4000);
        assert_eq!(view.stage, CheckoutStage::Building);
        assert_eq!(view.change_cents, -4000); // nothing tendered yet
        assert!(view.customer.is_none());
    }

    #[test]
    fn test_session_view_serializes_camel_case() {
        let session = SaleSession::new();
        let view = SessionView::from(&session);
        let json = serde_json::to_value(&view).unwrap();

        assert!(json.get("paymentMethod").is_some());
        assert!(json.get("amountTenderedCents").is_some());
        assert_eq!(json["stage"], "idle");
        assert_eq!(json["totals"]["subtotalCents"], 0);
    }
}
