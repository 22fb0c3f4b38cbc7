//! # Sale Engine
//!
//! The service boundary of the crate. One method per presentation
//! intent; every mutating method returns a fresh [`SessionView`] so the
//! caller re-renders from the snapshot instead of poking at state.
//!
//! ## Responsibilities
//! - Owns the [`SaleSession`] behind a mutex
//! - Resolves product ids against the catalog before they reach the cart
//! - Generates sale ids and timestamps at finalization (the core stays
//!   deterministic)
//! - Maps core and validation errors to wire-shaped [`ApiError`]s

use std::sync::Mutex;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use mostrador_core::{
    validation::validate_search_query, Customer, PaymentMethod, SaleSession,
};

use crate::catalog::{InMemoryCatalog, ProductCatalog};
use crate::config::EngineConfig;
use crate::customers::{CustomerDirectory, InMemoryDirectory};
use crate::error::ApiError;
use crate::snapshot::{CustomerView, ProductView, ReceiptLine, ReceiptView, SessionView};

// =============================================================================
// Engine
// =============================================================================

/// The sale transaction engine.
///
/// Generic over its collaborators so a storage-backed catalog or
/// directory can be swapped in without touching the transaction logic.
pub struct SaleEngine<C: ProductCatalog, D: CustomerDirectory> {
    catalog: C,
    customers: Mutex<D>,
    config: EngineConfig,
    session: Mutex<SaleSession>,
}

impl SaleEngine<InMemoryCatalog, InMemoryDirectory> {
    /// Engine wired with the demo catalog and an empty customer
    /// directory. Enough to drive a full sale out of the box.
    pub fn with_demo_catalog(config: EngineConfig) -> Self {
        SaleEngine::new(InMemoryCatalog::seed_demo(), InMemoryDirectory::new(), config)
    }
}

impl<C: ProductCatalog, D: CustomerDirectory> SaleEngine<C, D> {
    pub fn new(catalog: C, customers: D, config: EngineConfig) -> Self {
        SaleEngine {
            catalog,
            customers: Mutex::new(customers),
            config,
            session: Mutex::new(SaleSession::new()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current session snapshot without mutating anything.
    pub fn session(&self) -> SessionView {
        let session = self.session.lock().expect("session mutex poisoned");
        SessionView::from(&*session)
    }

    // -------------------------------------------------------------------------
    // Product search
    // -------------------------------------------------------------------------

    /// Searches the catalog. An empty query lists everything, which is
    /// what the search grid shows before the cashier types.
    pub fn products(&self, query: &str) -> Result<Vec<ProductView>, ApiError> {
        let query = validate_search_query(query)?;
        debug!(query = %query, "product search");

        let results = self.catalog.search(&query);
        Ok(results.iter().map(ProductView::from).collect())
    }

    // -------------------------------------------------------------------------
    // Cart intents
    // -------------------------------------------------------------------------

    /// Adds one unit of `product_id` to the cart, merging into an
    /// existing line when present.
    pub fn add_item(&self, product_id: &str) -> Result<SessionView, ApiError> {
        let product = self
            .catalog
            .find_by_id(product_id)
            .ok_or_else(|| ApiError::not_found("product", product_id))?;

        let mut session = self.session.lock().expect("session mutex poisoned");
        session.add_item(&product);
        debug!(product_id = %product_id, "item added to cart");

        // Stock is advisory only: the sale proceeds, the shortfall is
        // the back office's problem.
        if let Some(line) = session.cart().line(product_id) {
            if line.quantity > product.stock_on_hand {
                warn!(
                    product_id = %product_id,
                    quantity = line.quantity,
                    stock_on_hand = product.stock_on_hand,
                    "cart quantity exceeds stock on hand"
                );
            }
        }

        Ok(SessionView::from(&*session))
    }

    /// Adjusts a line's quantity by `delta`, clamping at 1. Unknown ids
    /// are ignored (the line may already have been removed).
    pub fn change_quantity(&self, product_id: &str, delta: i64) -> SessionView {
        let mut session = self.session.lock().expect("session mutex poisoned");
        session.change_quantity(product_id, delta);
        debug!(product_id = %product_id, delta, "quantity changed");
        SessionView::from(&*session)
    }

    /// Removes a line entirely. Idempotent.
    pub fn remove_item(&self, product_id: &str) -> SessionView {
        let mut session = self.session.lock().expect("session mutex poisoned");
        session.remove_item(product_id);
        debug!(product_id = %product_id, "line removed");
        SessionView::from(&*session)
    }

    /// Empties the cart and resets tender, keeping the associated
    /// customer for the next sale.
    pub fn clear_cart(&self) -> SessionView {
        let mut session = self.session.lock().expect("session mutex poisoned");
        session.clear();
        debug!("cart cleared");
        SessionView::from(&*session)
    }

    // -------------------------------------------------------------------------
    // Checkout intents
    // -------------------------------------------------------------------------

    /// Opens the checkout modal. Fails on an empty cart.
    pub fn open_checkout(&self) -> Result<SessionView, ApiError> {
        let mut session = self.session.lock().expect("session mutex poisoned");
        session.open_checkout()?;
        debug!(total_cents = session.cart().total_cents(), "checkout opened");
        Ok(SessionView::from(&*session))
    }

    /// Backs out of checkout. Cart and tender survive.
    pub fn cancel_checkout(&self) -> Result<SessionView, ApiError> {
        let mut session = self.session.lock().expect("session mutex poisoned");
        session.cancel_checkout()?;
        debug!("checkout cancelled");
        Ok(SessionView::from(&*session))
    }

    /// Picks the payment method while checkout is open.
    pub fn select_payment_method(&self, method: PaymentMethod) -> Result<SessionView, ApiError> {
        let mut session = self.session.lock().expect("session mutex poisoned");
        session.select_payment_method(method)?;
        debug!(?method, "payment method selected");
        Ok(SessionView::from(&*session))
    }

    /// Records the cash amount the customer handed over. Parsing is
    /// permissive; garbage input reads as zero tendered.
    pub fn set_amount_tendered(&self, input: &str) -> Result<SessionView, ApiError> {
        let mut session = self.session.lock().expect("session mutex poisoned");
        session.set_amount_tendered(input)?;
        debug!(
            tendered_cents = session.amount_tendered().cents(),
            "amount tendered set"
        );
        Ok(SessionView::from(&*session))
    }

    // -------------------------------------------------------------------------
    // Finalization
    // -------------------------------------------------------------------------

    /// Finalizes the sale and returns the receipt. On failure the
    /// session is untouched and the checkout stays open for retry.
    pub fn complete_sale(&self) -> Result<ReceiptView, ApiError> {
        let mut session = self.session.lock().expect("session mutex poisoned");

        let sale_id = Uuid::new_v4().to_string();
        let sale = session.complete_sale(sale_id, Utc::now())?;

        info!(
            sale_id = %sale.id,
            total_cents = sale.total_cents,
            payment_method = ?sale.payment_method,
            line_count = sale.lines.len(),
            "sale completed"
        );

        let customer_name = sale
            .customer
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| self.config.walk_in_label.clone());

        let lines = sale
            .lines
            .iter()
            .map(|l| ReceiptLine {
                description: l.description.clone(),
                quantity: l.quantity,
                unit_price_cents: l.unit_price_cents,
                line_total_cents: l.line_total_cents,
            })
            .collect();

        Ok(ReceiptView {
            sale_id: sale.id,
            store_name: self.config.store_name.clone(),
            timestamp: sale.completed_at.to_rfc3339(),
            customer_name,
            lines,
            subtotal_cents: sale.subtotal_cents,
            total_cents: sale.total_cents,
            payment_method: sale.payment_method,
            tendered_cents: sale.tendered_cents,
            change_cents: sale.change_cents,
            total_display: self.config.format_currency(sale.total_cents),
            change_display: self.config.format_currency(sale.change_cents.unwrap_or(0)),
        })
    }

    // -------------------------------------------------------------------------
    // Customer intents
    // -------------------------------------------------------------------------

    /// Searches the customer directory by name.
    pub fn search_customers(&self, query: &str) -> Result<Vec<CustomerView>, ApiError> {
        let query = validate_search_query(query)?;
        let directory = self.customers.lock().expect("directory mutex poisoned");
        Ok(directory.search(&query).iter().map(CustomerView::from).collect())
    }

    /// Creates a customer and associates them with the current sale in
    /// one step, matching the "create from the checkout modal" flow.
    pub fn create_customer(
        &self,
        name: &str,
        phone: Option<&str>,
    ) -> Result<SessionView, ApiError> {
        let customer = {
            let mut directory = self.customers.lock().expect("directory mutex poisoned");
            directory.create(name, phone)?
        };
        info!(name = %customer.name, "customer created");

        let mut session = self.session.lock().expect("session mutex poisoned");
        session.set_customer(customer);
        Ok(SessionView::from(&*session))
    }

    /// Associates an existing customer with the current sale.
    pub fn set_customer(&self, customer: Customer) -> SessionView {
        let mut session = self.session.lock().expect("session mutex poisoned");
        debug!(name = %customer.name, "customer associated");
        session.set_customer(customer);
        SessionView::from(&*session)
    }

    /// Detaches the customer; the sale becomes a walk-in again.
    pub fn remove_customer(&self) -> SessionView {
        let mut session = self.session.lock().expect("session mutex poisoned");
        session.remove_customer();
        debug!("customer removed");
        SessionView::from(&*session)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use mostrador_core::CheckoutStage;

    fn engine() -> SaleEngine<InMemoryCatalog, InMemoryDirectory> {
        SaleEngine::with_demo_catalog(EngineConfig::default())
    }

    #[test]
    fn test_add_unknown_product_is_not_found() {
        let engine = engine();
        let err = engine.add_item("no-such-id").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_product_search_by_description_and_barcode() {
        let engine = engine();
        let by_name = engine.products("pan").unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].description, "Pan Blanco");

        // all-digit query takes the exact barcode path
        let by_barcode = engine.products("3").unwrap();
        assert_eq!(by_barcode.len(), 1);
        assert_eq!(by_barcode[0].id, "3");

        let all = engine.products("").unwrap();
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn test_full_cash_sale_flow() {
        let engine = engine();

        // Pan Blanco $20.00 x2, Leche $45.00 x1
        engine.add_item("1").unwrap();
        engine.add_item("1").unwrap();
        engine.add_item("2").unwrap();

        let view = engine.session();
        assert_eq!(view.totals.total_cents, 8500);
        assert_eq!(view.stage, CheckoutStage::Building);

        engine.open_checkout().unwrap();
        engine.select_payment_method(PaymentMethod::Cash).unwrap();
        engine.set_amount_tendered("100").unwrap();

        let receipt = engine.complete_sale().unwrap();
        assert_eq!(receipt.total_cents, 8500);
        assert_eq!(receipt.tendered_cents, Some(10000));
        assert_eq!(receipt.change_cents, Some(1500));
        assert_eq!(receipt.total_display, "$85.00");
        assert_eq!(receipt.change_display, "$15.00");
        assert_eq!(receipt.customer_name, "Mostrador");
        assert_eq!(receipt.lines.len(), 2);

        // session fully reset for the next customer
        let after = engine.session();
        assert_eq!(after.stage, CheckoutStage::Idle);
        assert!(after.lines.is_empty());
        assert_eq!(after.amount_tendered_cents, 0);
    }

    #[test]
    fn test_insufficient_cash_keeps_checkout_open() {
        let engine = engine();
        engine.add_item("2").unwrap(); // $45.00
        engine.open_checkout().unwrap();
        engine.set_amount_tendered("30").unwrap();

        let err = engine.complete_sale().unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientPayment);

        let view = engine.session();
        assert_eq!(view.stage, CheckoutStage::AwaitingPayment);
        assert_eq!(view.totals.total_cents, 4500);

        // top up and retry
        engine.set_amount_tendered("45").unwrap();
        let receipt = engine.complete_sale().unwrap();
        assert_eq!(receipt.change_cents, Some(0));
    }

    #[test]
    fn test_card_sale_has_no_tendered_amount() {
        let engine = engine();
        engine.add_item("1").unwrap();
        engine.open_checkout().unwrap();
        engine.select_payment_method(PaymentMethod::Card).unwrap();

        let receipt = engine.complete_sale().unwrap();
        assert_eq!(receipt.tendered_cents, None);
        assert_eq!(receipt.change_cents, None);
        assert_eq!(receipt.change_display, "$0.00");
    }

    #[test]
    fn test_tender_outside_checkout_is_invalid_stage() {
        let engine = engine();
        engine.add_item("1").unwrap();
        let err = engine.set_amount_tendered("50").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStage);
    }

    #[test]
    fn test_open_checkout_on_empty_cart_fails() {
        let engine = engine();
        let err = engine.open_checkout().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStage);
    }

    #[test]
    fn test_customer_created_and_on_receipt() {
        let engine = engine();
        let view = engine.create_customer("Maria Lopez", Some("555-0101")).unwrap();
        assert_eq!(view.customer.as_ref().unwrap().name, "Maria Lopez");

        engine.add_item("1").unwrap();
        engine.open_checkout().unwrap();
        engine.set_amount_tendered("20").unwrap();

        let receipt = engine.complete_sale().unwrap();
        assert_eq!(receipt.customer_name, "Maria Lopez");

        // the next sale starts anonymous again
        assert!(engine.session().customer.is_none());
    }

    #[test]
    fn test_create_customer_blank_name_fails() {
        let engine = engine();
        let err = engine.create_customer("   ", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_customer_search() {
        let engine = engine();
        engine.create_customer("Maria Lopez", None).unwrap();
        engine.create_customer("Juan Perez", None).unwrap();

        let hits = engine.search_customers("mar").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Maria Lopez");
    }

    #[test]
    fn test_clear_cart_keeps_customer() {
        let engine = engine();
        engine.create_customer("Maria Lopez", None).unwrap();
        engine.add_item("1").unwrap();

        let view = engine.clear_cart();
        assert!(view.lines.is_empty());
        assert_eq!(view.stage, CheckoutStage::Idle);
        assert!(view.customer.is_some());
    }

    #[test]
    fn test_remove_customer() {
        let engine = engine();
        engine.create_customer("Maria Lopez", None).unwrap();
        let view = engine.remove_customer();
        assert!(view.customer.is_none());
    }
}
