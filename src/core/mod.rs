//! Core billing types, totals, and validation.
//!
//! This module provides products, invoice items, discounts, and the
//! [`Invoice`] aggregate that composes them into subtotal, tax and total.

mod builder;
mod config;
mod discount;
mod error;
mod invoice;
mod types;
mod validation;

pub use builder::*;
pub use config::*;
pub use discount::*;
pub use error::*;
pub use invoice::*;
pub use types::*;
pub use validation::*;
