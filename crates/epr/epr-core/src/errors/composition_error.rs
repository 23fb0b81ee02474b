use rust_decimal::Decimal;

use crate::models::MaterialId;

/// Set-level composition violations found by a whole-set check.
///
/// Values are carried already rounded to display precision.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompositionError {
    #[error("line {index}: material is required")]
    MissingMaterial { index: usize },

    #[error("line {index}: material weight must be greater than 0 kg, got {weight} kg")]
    NonPositiveWeight { index: usize, weight: Decimal },

    #[error(
        "line {index}: individual material weight ({weight} kg) cannot exceed product weight ({product_weight} kg)"
    )]
    LineWeightExceedsProduct {
        index: usize,
        weight: Decimal,
        product_weight: Decimal,
    },

    #[error("line {index}: composition percentage {percentage}% must be greater than 0 and at most 100%")]
    PercentageOutOfRange { index: usize, percentage: Decimal },

    #[error("material {material_id} is used by more than one active line (lines {first} and {second})")]
    DuplicateMaterial {
        material_id: MaterialId,
        first: usize,
        second: usize,
    },

    #[error(
        "Total material weight ({total} kg) exceeds product weight ({product_weight} kg) by {excess} kg. \
         Please adjust material weights to not exceed the product weight."
    )]
    TotalWeightExceeded {
        total: Decimal,
        product_weight: Decimal,
        excess: Decimal,
    },

    #[error(
        "Total composition percentage ({total}%) exceeds 100% by {excess}%. \
         Please adjust composition percentages."
    )]
    TotalPercentageExceeded { total: Decimal, excess: Decimal },
}
