use rust_decimal::Decimal;

use super::CompositionError;

/// Top-level error for the EPR composition crates.
///
/// Field-scoped form errors are not represented here: they are returned
/// as `LineValidation::Invalid` values.
#[derive(Debug, thiserror::Error)]
pub enum EprError {
    #[error("product weight must be greater than 0 kg to derive a percentage, got {product_weight} kg")]
    InvalidProductWeight { product_weight: Decimal },

    #[error("decimal overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("line index {index} out of range for a set of {len} lines")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("composition error: {0}")]
    Composition(#[from] CompositionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {reason}")]
    Config { reason: String },

    #[error("tracing setup failed: {reason}")]
    Tracing { reason: String },
}

impl From<toml::de::Error> for EprError {
    fn from(err: toml::de::Error) -> Self {
        EprError::Config {
            reason: err.to_string(),
        }
    }
}

/// Convenience alias used across all EPR crates.
pub type EprResult<T> = Result<T, EprError>;
