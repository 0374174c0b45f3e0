use std::sync::Arc;

use rust_decimal::Decimal;

use super::config::{DiscountPolicy, InvoiceConfig};
use super::discount::Discount;
use super::error::BillingError;
use super::invoice::Invoice;
use super::types::Product;
use super::validation;

/// Builder for constructing validated invoices.
///
/// ```
/// use std::sync::Arc;
///
/// use billbook::core::*;
/// use rust_decimal_macros::dec;
///
/// let widget = Arc::new(Product::new(1, "Widget", dec!(10.00)));
///
/// let invoice = InvoiceBuilder::new()
///     .tax_rate(dec!(0.10))
///     .add_product(&widget, 2)
///     .add_product(&widget, 3)
///     .add_discount(Discount::percentage(20))
///     .build()
///     .unwrap();
///
/// assert_eq!(invoice.total(), dec!(44.00));
/// ```
#[derive(Debug, Default)]
pub struct InvoiceBuilder {
    config: InvoiceConfig,
    lines: Vec<(Arc<Product>, u32)>,
    discounts: Vec<Discount>,
}

impl InvoiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: InvoiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.config.tax_rate = rate;
        self
    }

    pub fn discount_policy(mut self, policy: DiscountPolicy) -> Self {
        self.config.discount_policy = policy;
        self
    }

    pub fn add_product(mut self, product: &Arc<Product>, quantity: u32) -> Self {
        self.lines.push((Arc::clone(product), quantity));
        self
    }

    pub fn add_discount(mut self, discount: Discount) -> Self {
        self.discounts.push(discount);
        self
    }

    /// Build the invoice and run validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Invoice, BillingError> {
        self.config.validate()?;

        if self.lines.is_empty() {
            return Err(BillingError::Builder(
                "at least one product is required".into(),
            ));
        }

        let invoice = self.assemble();

        let errors = validation::validate_invoice(&invoice);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BillingError::Validation(msg));
        }

        Ok(invoice)
    }

    /// Build without validation, accepting any input.
    pub fn build_unchecked(self) -> Invoice {
        self.assemble()
    }

    fn assemble(self) -> Invoice {
        let mut invoice = Invoice::with_config(self.config);
        for (product, quantity) in &self.lines {
            invoice.add_product(product, *quantity);
        }
        for discount in self.discounts {
            invoice.add_discount(discount);
        }
        invoice
    }
}
