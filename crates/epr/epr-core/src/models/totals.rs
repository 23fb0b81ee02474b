use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sums over the active lines of a set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositionTotals {
    #[ts(type = "string")]
    pub total_weight: Decimal,
    #[ts(type = "string")]
    pub total_percentage: Decimal,
}

/// What is still available before either bound is reached.
/// Negative when a set is already over a bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RemainingCapacity {
    #[ts(type = "string")]
    pub remaining_weight: Decimal,
    #[ts(type = "string")]
    pub remaining_percentage: Decimal,
}

/// Per-product aggregate for dashboard views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductSummary {
    #[ts(type = "string")]
    pub total_weight: Decimal,
    #[ts(type = "string")]
    pub total_percentage: Decimal,
    pub line_count: usize,
}
