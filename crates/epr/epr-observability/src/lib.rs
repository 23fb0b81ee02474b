//! # epr-observability
//!
//! Structured logging for the EPR composition crates.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter};
