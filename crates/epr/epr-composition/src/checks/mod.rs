//! Per-field checks for a pending composition line.
//!
//! Each check looks at one form field and returns at most one failure.
//! Within a field, the first failing condition wins.

pub mod duplicate;
pub mod material;
pub mod percentage;
pub mod weight;

use rust_decimal::{Decimal, RoundingStrategy};

/// Render `value` with exactly `places` decimals, half away from zero.
pub(crate) fn fixed(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", places as usize, rounded)
}
