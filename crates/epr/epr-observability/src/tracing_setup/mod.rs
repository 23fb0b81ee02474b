//! Tracing setup: structured logging via `tracing-subscriber`.

use epr_core::config::defaults::LOG_ENV_VAR;
use epr_core::config::ObservabilityConfig;
use epr_core::errors::{EprError, EprResult};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects the `EPR_LOG` environment variable for filtering and falls back
/// to `config.log_level`. Fails if a global subscriber is already set.
pub fn init_tracing(config: &ObservabilityConfig) -> EprResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str, json: bool) -> EprResult<()> {
    install(EnvFilter::new(filter), json)
}

fn install(filter: EnvFilter, json: bool) -> EprResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| EprError::Tracing {
        reason: e.to_string(),
    })
}
