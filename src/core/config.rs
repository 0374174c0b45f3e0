use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::BillingError;

/// Flat tax rate applied when nothing else is configured (10%).
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.10);

/// How the subtotal treats discounts that exceed the item sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// Subtract discounts literally; the subtotal may become negative.
    #[default]
    Unclamped,
    /// Floor the subtotal at zero.
    ClampAtZero,
}

/// Per-invoice settings.
///
/// Deserializes from partial documents; missing fields take their defaults.
///
/// ```
/// use billbook::core::*;
/// use rust_decimal_macros::dec;
///
/// let config = InvoiceConfig::tax_percent(19).with_discount_policy(DiscountPolicy::ClampAtZero);
/// assert_eq!(config.tax_rate, dec!(0.19));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceConfig {
    /// Tax rate as a fraction (0.10 = 10%).
    pub tax_rate: Decimal,
    pub discount_policy: DiscountPolicy,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            discount_policy: DiscountPolicy::Unclamped,
        }
    }
}

impl InvoiceConfig {
    /// Default config with the tax rate given as a whole percentage.
    pub fn tax_percent(percent: u32) -> Self {
        Self::default().with_tax_rate(Decimal::from(percent) / dec!(100))
    }

    pub fn with_tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn with_discount_policy(mut self, policy: DiscountPolicy) -> Self {
        self.discount_policy = policy;
        self
    }

    /// Reject settings no invoice could sensibly use.
    pub fn validate(&self) -> Result<(), BillingError> {
        if self.tax_rate < Decimal::ZERO {
            return Err(BillingError::Config(format!(
                "tax rate {} must not be negative",
                self.tax_rate
            )));
        }
        Ok(())
    }
}
