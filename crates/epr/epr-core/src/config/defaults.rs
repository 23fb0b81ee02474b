// Single source of truth for all default values.

// --- Composition ---
pub const DEFAULT_WEIGHT_PRECISION: u32 = 3;
pub const DEFAULT_PERCENTAGE_PRECISION: u32 = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
pub const LOG_ENV_VAR: &str = "EPR_LOG";
