//! Configuration loaded from TOML.
//!
//! Every section is optional; missing keys fall back to [`defaults`].
//!
//! ```
//! use epr_core::config::EprConfig;
//!
//! let config = EprConfig::from_toml("[composition]\nweight_precision = 4\n").unwrap();
//! assert_eq!(config.composition.weight_precision, 4);
//! assert_eq!(config.composition.percentage_precision, 2);
//! ```

mod composition_config;
pub mod defaults;
mod observability_config;

pub use composition_config::CompositionConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::EprResult;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EprConfig {
    pub composition: CompositionConfig,
    pub observability: ObservabilityConfig,
}

impl EprConfig {
    /// Parse a TOML document. An empty document yields all defaults.
    pub fn from_toml(source: &str) -> EprResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> EprResult<String> {
        toml::to_string(self).map_err(|e| crate::errors::EprError::Config {
            reason: e.to_string(),
        })
    }
}
