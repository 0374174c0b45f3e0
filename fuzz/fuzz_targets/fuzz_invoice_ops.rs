#![no_main]

use std::collections::HashSet;
use std::sync::Arc;

use billbook::core::*;
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    let catalog: Vec<Arc<Product>> = (0..8u64)
        .map(|i| Arc::new(Product::new(i, format!("P{i}"), Decimal::new(i as i64 * 125, 2))))
        .collect();

    // Each 3-byte chunk is one operation: add a product or attach a discount.
    let mut invoice = Invoice::new();
    for op in data.chunks_exact(3) {
        match op[0] % 3 {
            0 => invoice.add_product(&catalog[op[1] as usize % catalog.len()], op[2] as u32),
            1 => invoice.add_discount(Discount::fixed(Decimal::from(op[1]))),
            _ => invoice.add_discount(Discount::percentage(op[1] as u32)),
        }
    }

    let mut ids = HashSet::new();
    for item in invoice.items() {
        assert!(ids.insert(item.product_id()), "duplicate item for product");
    }

    let totals = invoice.totals();
    assert_eq!(totals.subtotal, totals.gross - totals.discount_total);
    assert_eq!(totals.total, totals.subtotal + totals.taxes);
});
