//! # mostrador-core: Pure Business Logic for Mostrador POS
//!
//! This crate is the **heart** of Mostrador POS. It contains the sale
//! transaction logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Mostrador POS Architecture                       │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Frontend (React/Inertia)                      │  │
//! │  │   Product grid ──► Cart panel ──► Checkout modal ──► Receipt  │  │
//! │  └───────────────────────────┬───────────────────────────────────┘  │
//! │                              │ intents / snapshots                  │
//! │  ┌───────────────────────────▼───────────────────────────────────┐  │
//! │  │                    mostrador-engine                           │  │
//! │  │   SaleEngine, ProductCatalog, CustomerDirectory, DTOs         │  │
//! │  └───────────────────────────┬───────────────────────────────────┘  │
//! │                              │                                      │
//! │  ┌───────────────────────────▼───────────────────────────────────┐  │
//! │  │              ★ mostrador-core (THIS CRATE) ★                  │  │
//! │  │                                                               │  │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌────────┐  │  │
//! │  │   │  types  │ │  money  │ │  cart   │ │ session │ │ valid. │  │  │
//! │  │   │ Product │ │  Money  │ │  Cart   │ │ stages  │ │ rules  │  │  │
//! │  │   │  Sale   │ │ (cents) │ │CartLine │ │ tender  │ │ checks │  │  │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO CLOCK • NO RNG • PURE FUNCTIONS                 │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, Sale, PaymentMethod)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart and its line merge/clamp rules
//! - [`session`] - The checkout state machine
//! - [`validation`] - Boundary validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic, same input = same output; sale
//!    ids and timestamps are supplied by the caller
//! 2. **Integer Money**: all monetary values are cents (i64)
//! 3. **Explicit Errors**: typed error enums, never strings or panics
//! 4. **Errors Leave State Untouched**: every failed intent is
//!    recoverable by re-prompting the cashier
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use mostrador_core::{PaymentMethod, Product, SaleSession};
//!
//! let bread = Product {
//!     id: "1".to_string(),
//!     barcode: Some("1".to_string()),
//!     description: "Pan Blanco".to_string(),
//!     sale_price_cents: 2000,
//!     purchase_price_cents: None,
//!     category: None,
//!     stock_on_hand: 50,
//! };
//!
//! let mut session = SaleSession::new();
//! session.add_item(&bread);
//! session.add_item(&bread); // merges: one line, quantity 2
//!
//! session.open_checkout().unwrap();
//! session.select_payment_method(PaymentMethod::Cash).unwrap();
//! session.set_amount_tendered("50.00").unwrap();
//!
//! let sale = session
//!     .complete_sale("sale-1".to_string(), Utc::now())
//!     .unwrap();
//! assert_eq!(sale.total_cents, 4000);
//! assert_eq!(sale.change_cents, Some(1000)); // $10.00 back
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use session::{CheckoutStage, SaleSession};
pub use types::{Customer, PaymentMethod, Product, Sale, SaleLine};
