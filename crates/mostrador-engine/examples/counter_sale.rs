// End-to-end counter sale against the demo catalog.
//
// Run with:
//   RUST_LOG=debug cargo run --example counter_sale

use tracing_subscriber::EnvFilter;

use mostrador_engine::{ApiError, EngineConfig, PaymentMethod, SaleEngine};

fn main() -> Result<(), ApiError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let engine = SaleEngine::with_demo_catalog(EngineConfig::from_env());

    // Cashier scans: two loaves of bread and a carton of milk.
    engine.add_item("1")?;
    engine.add_item("1")?;
    engine.add_item("2")?;

    let view = engine.session();
    println!("cart total: {}", engine.config().format_currency(view.totals.total_cents));

    engine.open_checkout()?;
    engine.select_payment_method(PaymentMethod::Cash)?;
    engine.set_amount_tendered("100")?;

    let receipt = engine.complete_sale()?;
    println!("{}", serde_json::to_string_pretty(&receipt).unwrap());
    println!("change due: {}", receipt.change_display);

    Ok(())
}
