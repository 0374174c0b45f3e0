//! Edge cases: empty invoices, over-discounting, config parsing, serialization.

use std::sync::Arc;

use billbook::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn widget() -> Arc<Product> {
    Arc::new(Product::new(1, "Widget", dec!(10.00)))
}

// ---------------------------------------------------------------------------
// Empty invoices
// ---------------------------------------------------------------------------

#[test]
fn empty_invoice_is_zero() {
    let inv = Invoice::new();
    assert!(inv.items().is_empty());
    assert_eq!(inv.subtotal(), Decimal::ZERO);
    assert_eq!(inv.taxes(), Decimal::ZERO);
    assert_eq!(inv.total(), Decimal::ZERO);
}

#[test]
fn fixed_discount_applies_without_items() {
    let mut inv = Invoice::new();
    inv.add_discount(Discount::fixed(dec!(10)));
    assert_eq!(inv.subtotal(), dec!(-10));
    assert_eq!(inv.taxes(), dec!(-1));
    assert_eq!(inv.total(), dec!(-11));
}

#[test]
fn percentage_discount_without_items_is_zero() {
    let mut inv = Invoice::new();
    inv.add_discount(Discount::percentage(20));
    assert_eq!(inv.total_discount(), Decimal::ZERO);
    assert_eq!(inv.total(), Decimal::ZERO);
}

// ---------------------------------------------------------------------------
// Over-discounting
// ---------------------------------------------------------------------------

#[test]
fn duplicate_discounts_all_apply() {
    let mut inv = Invoice::new();
    inv.add_product(&widget(), 5);
    for _ in 0..3 {
        inv.add_discount(Discount::percentage(20));
    }
    assert_eq!(inv.discounts().len(), 3);
    assert_eq!(inv.total_discount(), dec!(30));
    assert_eq!(inv.subtotal(), dec!(20));
}

#[test]
fn percentages_above_hundred_are_accepted() {
    let mut inv = Invoice::new();
    inv.add_product(&widget(), 1);
    inv.add_discount(Discount::percentage(150));
    assert_eq!(inv.subtotal(), dec!(-5));
    assert!(!validate_invoice(&inv).is_empty());
}

#[test]
fn clamped_policy_keeps_totals_at_zero() {
    let config = InvoiceConfig::default().with_discount_policy(DiscountPolicy::ClampAtZero);
    let mut inv = Invoice::with_config(config);
    inv.add_product(&widget(), 1);
    inv.add_discount(Discount::fixed(dec!(7)));
    inv.add_discount(Discount::fixed(dec!(7)));

    let totals = inv.totals();
    assert_eq!(totals.gross, dec!(10));
    assert_eq!(totals.discount_total, dec!(14));
    assert_eq!(totals.subtotal, Decimal::ZERO);
    assert_eq!(totals.taxes, Decimal::ZERO);
    assert_eq!(totals.total, Decimal::ZERO);
}

#[test]
fn clamped_policy_is_neutral_when_positive() {
    let config = InvoiceConfig::default().with_discount_policy(DiscountPolicy::ClampAtZero);
    let mut inv = Invoice::with_config(config);
    inv.add_product(&widget(), 5);
    inv.add_discount(Discount::fixed(dec!(10)));
    assert_eq!(inv.subtotal(), dec!(40));
}

// ---------------------------------------------------------------------------
// Quantities
// ---------------------------------------------------------------------------

#[test]
fn zero_quantity_is_kept_but_flagged() {
    let mut inv = Invoice::new();
    inv.add_product(&widget(), 0);
    assert_eq!(inv.items().len(), 1);
    assert_eq!(inv.total(), Decimal::ZERO);

    let errors = validate_invoice(&inv);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "items[0].quantity: quantity must be positive");
}

#[test]
fn quantity_merge_saturates() {
    let widget = widget();
    let mut inv = Invoice::new();
    inv.add_product(&widget, u32::MAX);
    inv.add_product(&widget, 10);
    assert_eq!(inv.items()[0].quantity(), u32::MAX);
}

#[test]
fn fractional_prices_stay_exact() {
    let pen = Arc::new(Product::new(9, "Pen", dec!(0.10)));
    let mut inv = Invoice::new();
    for _ in 0..3 {
        inv.add_product(&pen, 1);
    }
    assert_eq!(inv.subtotal(), dec!(0.30));
    assert_eq!(inv.total(), dec!(0.33));
}

#[test]
fn rounded_totals_for_display() {
    let pen = Arc::new(Product::new(9, "Pen", dec!(0.99)));
    let mut inv = Invoice::with_config(InvoiceConfig::tax_percent(19));
    inv.add_product(&pen, 3);

    // 2.97 * 0.19 = 0.5643
    assert_eq!(inv.taxes(), dec!(0.5643));
    let rounded = inv.totals().rounded(2);
    assert_eq!(rounded.taxes, dec!(0.56));
    assert_eq!(rounded.total, dec!(3.53));
}

// ---------------------------------------------------------------------------
// Configuration documents
// ---------------------------------------------------------------------------

#[test]
fn config_from_partial_json() {
    let config: InvoiceConfig = serde_json::from_str(r#"{"tax_rate": "0.07"}"#).unwrap();
    assert_eq!(config.tax_rate, dec!(0.07));
    assert_eq!(config.discount_policy, DiscountPolicy::Unclamped);

    let config: InvoiceConfig =
        serde_json::from_str(r#"{"discount_policy": "clamp_at_zero"}"#).unwrap();
    assert_eq!(config.tax_rate, dec!(0.10));
    assert_eq!(config.discount_policy, DiscountPolicy::ClampAtZero);
}

#[test]
fn config_rejects_unknown_policy() {
    let result: Result<InvoiceConfig, _> =
        serde_json::from_str(r#"{"discount_policy": "sometimes"}"#);
    assert!(result.is_err());
}

#[test]
fn discounts_from_json() {
    let discounts: Vec<Discount> = serde_json::from_str(
        r#"[{"kind": "fixed", "amount": "10"}, {"kind": "percentage", "rate": "0.2"}]"#,
    )
    .unwrap();
    assert_eq!(discounts, vec![Discount::fixed(dec!(10)), Discount::percentage(20)]);
}

#[test]
fn totals_survive_json() {
    let mut inv = Invoice::new();
    inv.add_product(&widget(), 5);
    inv.add_discount(Discount::percentage(20));

    let totals = inv.totals();
    let json = serde_json::to_string(&totals).unwrap();
    let parsed: Totals = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, totals);
}
