use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog entry referenced by invoice items.
///
/// Immutable after construction. Items hold it behind an [`Arc`], so the same
/// product can back lines on any number of invoices without being copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: u64,
    name: String,
    price: Decimal,
}

impl Product {
    /// Create a product. No range checks are applied; see
    /// [`validate_product`](super::validate_product).
    pub fn new(id: u64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Catalog identifier, unique per catalog.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// A line on an invoice: one product plus a quantity.
///
/// Items are only created or grown by [`Invoice::add_product`](super::Invoice::add_product).
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    product: Arc<Product>,
    quantity: u32,
}

impl Item {
    pub(crate) fn new(product: Arc<Product>, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Line total: unit price times quantity.
    pub fn total(&self) -> Decimal {
        self.product.price() * Decimal::from(self.quantity)
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price of the underlying product.
    pub fn price(&self) -> Decimal {
        self.product.price()
    }

    /// Human-readable label for the line (the product name).
    pub fn description(&self) -> &str {
        self.product.name()
    }

    pub fn product_id(&self) -> u64 {
        self.product.id()
    }

    /// Shared handle to the underlying product.
    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    /// Grow the quantity by `quantity`, saturating at `u32::MAX`.
    /// Returns false if the addition saturated.
    pub(crate) fn add_quantity(&mut self, quantity: u32) -> bool {
        match self.quantity.checked_add(quantity) {
            Some(q) => {
                self.quantity = q;
                true
            }
            None => {
                self.quantity = u32::MAX;
                false
            }
        }
    }
}

/// Snapshot of the derived invoice amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all item totals before discounts.
    pub gross: Decimal,
    /// Sum of all discount adjustments.
    pub discount_total: Decimal,
    /// gross - discount_total, after the configured discount policy.
    pub subtotal: Decimal,
    /// Tax on the subtotal.
    pub taxes: Decimal,
    /// subtotal + taxes.
    pub total: Decimal,
}

impl Totals {
    /// Round every amount to `dp` decimal places using half-up (commercial)
    /// rounding. Presentation only; the invoice itself stays exact.
    pub fn rounded(&self, dp: u32) -> Self {
        Self {
            gross: round_half_up(self.gross, dp),
            discount_total: round_half_up(self.discount_total, dp),
            subtotal: round_half_up(self.subtotal, dp),
            taxes: round_half_up(self.taxes, dp),
            total: round_half_up(self.total, dp),
        }
    }
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
