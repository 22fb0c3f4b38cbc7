// =============================================================================
// Mostrador Engine - Sale Transaction Service Boundary
// =============================================================================
//
// ┌─────────────────────────────────────────────────────────────┐
// │                     Presentation layer                      │
// │          (renders SessionView / ReceiptView JSON)           │
// └──────────────────────────┬──────────────────────────────────┘
//                            │ one method per intent
// ┌──────────────────────────▼──────────────────────────────────┐
// │                        SaleEngine                           │
// │   Mutex<SaleSession> + ProductCatalog + CustomerDirectory   │
// │   ids, timestamps, logging, error mapping live HERE         │
// └──────────────────────────┬──────────────────────────────────┘
//                            │ pure calls
// ┌──────────────────────────▼──────────────────────────────────┐
// │                      mostrador-core                         │
// │          cart, session state machine, money, rules          │
// └─────────────────────────────────────────────────────────────┘
//
// The engine is the only place with a clock, an RNG, or a lock. The
// core below it is pure and the snapshots above it are inert data.
// =============================================================================

pub mod catalog;
pub mod config;
pub mod customers;
pub mod engine;
pub mod error;
pub mod snapshot;

pub use catalog::{InMemoryCatalog, ProductCatalog};
pub use config::EngineConfig;
pub use customers::{CustomerDirectory, InMemoryDirectory};
pub use engine::SaleEngine;
pub use error::{ApiError, ErrorCode};
pub use snapshot::{
    CartLineView, CartTotals, CustomerView, ProductView, ReceiptLine, ReceiptView, SessionView,
};

// Re-export the domain types callers need to talk to the engine.
pub use mostrador_core::{CheckoutStage, Customer, PaymentMethod, Product};
