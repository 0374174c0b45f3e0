use std::collections::HashSet;

use rust_decimal::Decimal;

use super::config::DiscountPolicy;
use super::discount::Discount;
use super::error::ValidationError;
use super::invoice::Invoice;
use super::types::Product;

/// Validate an invoice and everything on it.
/// Returns all validation errors found (not just the first).
///
/// Invoices accept any input; this pass is how callers opt into rejecting
/// out-of-range values.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.config().tax_rate < Decimal::ZERO {
        errors.push(ValidationError::new(
            "config.tax_rate",
            format!("tax rate {} must not be negative", invoice.config().tax_rate),
        ));
    }

    let mut seen = HashSet::new();
    for (i, item) in invoice.items().iter().enumerate() {
        if item.quantity() == 0 {
            errors.push(ValidationError::new(
                format!("items[{i}].quantity"),
                "quantity must be positive",
            ));
        }
        if !seen.insert(item.product_id()) {
            errors.push(ValidationError::new(
                format!("items[{i}].product"),
                format!("product {} appears on more than one item", item.product_id()),
            ));
        }
        for mut err in validate_product(item.product()) {
            err.field = format!("items[{i}].{}", err.field);
            errors.push(err);
        }
    }

    for (i, discount) in invoice.discounts().iter().enumerate() {
        for mut err in validate_discount(discount) {
            err.field = format!("discounts[{i}].{}", err.field);
            errors.push(err);
        }
    }

    // Under ClampAtZero a negative subtotal cannot be observed.
    if invoice.config().discount_policy == DiscountPolicy::Unclamped {
        let subtotal = invoice.subtotal();
        if subtotal < Decimal::ZERO {
            errors.push(ValidationError::new(
                "subtotal",
                format!("discounts exceed item total, subtotal is {subtotal}"),
            ));
        }
    }

    errors
}

/// Validate a single product.
pub fn validate_product(product: &Product) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if product.name().trim().is_empty() {
        errors.push(ValidationError::new(
            "product.name",
            "product name must not be empty",
        ));
    }
    if product.price() < Decimal::ZERO {
        errors.push(ValidationError::new(
            "product.price",
            format!("price {} must not be negative", product.price()),
        ));
    }

    errors
}

/// Validate a single discount.
pub fn validate_discount(discount: &Discount) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match discount {
        Discount::Fixed { amount } if *amount < Decimal::ZERO => {
            errors.push(ValidationError::new(
                "amount",
                format!("fixed discount {amount} must not be negative"),
            ));
        }
        Discount::Percentage { rate } if *rate < Decimal::ZERO || *rate > Decimal::ONE => {
            errors.push(ValidationError::new(
                "rate",
                format!("percentage discount {discount} must be between 0% and 100%"),
            ));
        }
        _ => {}
    }

    errors
}
