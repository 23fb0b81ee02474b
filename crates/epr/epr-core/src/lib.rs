//! # epr-core
//!
//! Foundation crate for EPR product composition validation.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EprConfig;
pub use errors::{CompositionError, EprError, EprResult};
pub use models::{
    CompositionLine, LineValidation, MaterialId, ProductCompositionRecord, ProductCompositionSet,
    ProductId,
};
pub use rust_decimal::Decimal;
