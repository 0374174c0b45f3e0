use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::config::{DiscountPolicy, InvoiceConfig};
use super::discount::Discount;
use super::types::{Item, Product, Totals};

/// Aggregate of items and discounts deriving subtotal, tax and total.
///
/// Holds at most one [`Item`] per product id: adding a product that is
/// already on the invoice grows that item's quantity. Items keep the order in
/// which their product was first added.
#[derive(Debug, Clone, Default)]
pub struct Invoice {
    config: InvoiceConfig,
    items: Vec<Item>,
    discounts: Vec<Discount>,
}

impl Invoice {
    /// Empty invoice with the default config (10% tax, unclamped discounts).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InvoiceConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            discounts: Vec::new(),
        }
    }

    pub fn config(&self) -> &InvoiceConfig {
        &self.config
    }

    /// Add `quantity` units of `product`, merging with an existing item for
    /// the same product id.
    pub fn add_product(&mut self, product: &Arc<Product>, quantity: u32) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id() == product.id())
        {
            if !item.add_quantity(quantity) {
                warn!(
                    product_id = product.id(),
                    added = quantity,
                    "item quantity saturated"
                );
            }
            debug!(
                product_id = product.id(),
                added = quantity,
                quantity = item.quantity(),
                "merged into existing item"
            );
            return;
        }

        debug!(product_id = product.id(), quantity, "appended item");
        self.items.push(Item::new(Arc::clone(product), quantity));
    }

    /// Attach a discount. Discounts are never merged; duplicates all apply.
    pub fn add_discount(&mut self, discount: Discount) {
        debug!(%discount, "attached discount");
        self.discounts.push(discount);
    }

    /// Read-only view of the items, in first-added order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Sum of item totals before discounts.
    pub fn gross(&self) -> Decimal {
        self.items.iter().map(Item::total).sum()
    }

    /// Sum of all discount adjustments, each evaluated against the current items.
    pub fn total_discount(&self) -> Decimal {
        self.discounts.iter().map(|d| d.total(&self.items)).sum()
    }

    /// Gross minus total discount, subject to the configured discount policy.
    pub fn subtotal(&self) -> Decimal {
        let subtotal = self.gross() - self.total_discount();
        match self.config.discount_policy {
            DiscountPolicy::Unclamped => subtotal,
            DiscountPolicy::ClampAtZero if subtotal < Decimal::ZERO => {
                warn!(%subtotal, "discounts exceed item sum, clamping subtotal to zero");
                Decimal::ZERO
            }
            DiscountPolicy::ClampAtZero => subtotal,
        }
    }

    /// Tax on the post-discount subtotal.
    pub fn taxes(&self) -> Decimal {
        self.config.tax_rate * self.subtotal()
    }

    pub fn total(&self) -> Decimal {
        let subtotal = self.subtotal();
        subtotal + self.config.tax_rate * subtotal
    }

    /// Snapshot of all derived amounts.
    pub fn totals(&self) -> Totals {
        let gross = self.gross();
        let discount_total = self.total_discount();
        let subtotal = self.subtotal();
        let taxes = self.config.tax_rate * subtotal;
        Totals {
            gross,
            discount_total,
            subtotal,
            taxes,
            total: subtotal + taxes,
        }
    }
}
