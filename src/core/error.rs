use thiserror::Error;

/// Errors that can occur during invoice construction or configuration.
///
/// The invoice operations themselves never fail; these errors only come from
/// the opt-in hardening paths ([`InvoiceBuilder::build`](super::InvoiceBuilder::build)
/// and [`InvoiceConfig::validate`](super::InvoiceConfig::validate)).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BillingError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Invoice configuration is out of range.
    #[error("config error: {0}")]
    Config(String),
}

/// A single validation finding with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[0].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
