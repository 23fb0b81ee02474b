use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a set's total weight relates to the product weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WeightStatus {
    /// Total equals the product weight.
    Exact,
    /// Total is below the product weight.
    UnderCapacity,
    /// Total is above the product weight.
    Exceeded,
}

/// Weight check over a whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeightReport {
    pub valid: bool,
    pub status: WeightStatus,
    pub message: String,
    #[ts(type = "string")]
    pub product_weight: Decimal,
    #[ts(type = "string")]
    pub total_weight: Decimal,
    #[ts(type = "string")]
    pub remaining_weight: Decimal,
}

/// Percentage check over a whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PercentageReport {
    pub valid: bool,
    #[ts(type = "string")]
    pub total_percentage: Decimal,
    #[ts(type = "string")]
    pub remaining_percentage: Decimal,
}

/// Both checks together, as shown in the composition header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FullValidation {
    pub percentage: PercentageReport,
    pub weight: WeightReport,
}

impl FullValidation {
    pub fn is_valid(&self) -> bool {
        self.percentage.valid && self.weight.valid
    }
}
