use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::types::Item;

/// Pricing adjustment computed from the items on an invoice.
///
/// Every discount sees the same item list; discounts never see each other's
/// effect, so several of them add up rather than compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Discount {
    /// Flat amount, independent of the items.
    Fixed { amount: Decimal },
    /// Fraction of the pre-discount item sum (0.2 = 20%).
    Percentage { rate: Decimal },
}

impl Default for Discount {
    /// The neutral discount: always contributes zero.
    fn default() -> Self {
        Self::Fixed {
            amount: Decimal::ZERO,
        }
    }
}

impl Discount {
    pub fn fixed(amount: Decimal) -> Self {
        Self::Fixed { amount }
    }

    /// Percentage discount from a whole percentage (20 → 20%).
    /// Values outside 0..=100 are accepted as-is.
    pub fn percentage(percent: u32) -> Self {
        Self::Percentage {
            rate: Decimal::from(percent) / dec!(100),
        }
    }

    /// Adjustment this discount contributes for `items`.
    pub fn total(&self, items: &[Item]) -> Decimal {
        match self {
            Self::Fixed { amount } => *amount,
            Self::Percentage { rate } => {
                let gross: Decimal = items.iter().map(Item::total).sum();
                gross * *rate
            }
        }
    }

    /// Flat amount for `Fixed`, `None` otherwise.
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Fixed { amount } => Some(*amount),
            Self::Percentage { .. } => None,
        }
    }

    /// Rate for `Percentage`, `None` otherwise.
    pub fn percentage_rate(&self) -> Option<Decimal> {
        match self {
            Self::Fixed { .. } => None,
            Self::Percentage { rate } => Some(*rate),
        }
    }
}

impl std::fmt::Display for Discount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed { amount } => write!(f, "{} off", amount.normalize()),
            Self::Percentage { rate } => write!(f, "{}%", (*rate * dec!(100)).normalize()),
        }
    }
}
