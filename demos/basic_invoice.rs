use std::sync::Arc;

use billbook::core::*;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=debug shows item merges and discount attachments.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    let widget = Arc::new(Product::new(1, "Widget", dec!(10.00)));
    let gadget = Arc::new(Product::new(2, "Gadget", dec!(4.25)));

    let invoice = InvoiceBuilder::new()
        .add_product(&widget, 2)
        .add_product(&gadget, 4)
        .add_product(&widget, 3)
        .add_discount(Discount::fixed(dec!(10)))
        .add_discount(Discount::percentage(20))
        .build()
        .expect("invoice should be valid");

    for item in invoice.items() {
        println!(
            "  {} x {} @ {} = {}",
            item.quantity(),
            item.description(),
            item.price(),
            item.total()
        );
    }
    println!("---");
    for discount in invoice.discounts() {
        println!("  Discount {}: -{}", discount, discount.total(invoice.items()));
    }
    println!("---");

    let totals = invoice.totals().rounded(2);
    println!("Gross:    {}", totals.gross);
    println!("Subtotal: {}", totals.subtotal);
    println!("Taxes:    {}", totals.taxes);
    println!("Total:    {}", totals.total);
}
