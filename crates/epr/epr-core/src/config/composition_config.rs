use serde::{Deserialize, Serialize};

use super::defaults;

/// Composition validation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionConfig {
    /// Decimal places used when a weight (kg) appears in a message.
    pub weight_precision: u32,
    /// Decimal places used when a percentage appears in a message.
    pub percentage_precision: u32,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            weight_precision: defaults::DEFAULT_WEIGHT_PRECISION,
            percentage_precision: defaults::DEFAULT_PERCENTAGE_PRECISION,
        }
    }
}
