//! # billbook
//!
//! A small invoice model: products, line items, discounts, and an invoice
//! aggregate that derives subtotal, tax, and total.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Products are shared between items through [`std::sync::Arc`], so adding the
//! same product twice never copies it.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use billbook::core::*;
//! use rust_decimal_macros::dec;
//!
//! let widget = Arc::new(Product::new(1, "Widget", dec!(10.00)));
//!
//! let mut invoice = Invoice::new();
//! invoice.add_product(&widget, 2);
//! invoice.add_product(&widget, 3);
//! invoice.add_discount(Discount::fixed(dec!(10)));
//!
//! assert_eq!(invoice.items().len(), 1);
//! assert_eq!(invoice.subtotal(), dec!(40.00));
//! assert_eq!(invoice.taxes(), dec!(4.00));
//! assert_eq!(invoice.total(), dec!(44.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Products, items, discounts, invoice totals, validation |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
