//! Whole-set checks: the weight/percentage reports shown above the
//! composition table, and the "validate all" consistency check run before
//! a set is submitted.

use std::cmp::Ordering;
use std::collections::HashMap;

use epr_core::constants::{MAX_PERCENTAGE, MSG_WEIGHTS_EXACT};
use epr_core::errors::CompositionError;
use epr_core::models::{
    FullValidation, MaterialId, PercentageReport, ProductCompositionSet, WeightReport,
    WeightStatus,
};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::checks::fixed;
use crate::totals::compute_totals;

/// Compare the set's total material weight with the product weight.
pub fn weight_report(set: &ProductCompositionSet, precision: u32) -> WeightReport {
    let total_weight = compute_totals(set).total_weight;
    let remaining_weight = set.product_weight.saturating_sub(total_weight);

    let (status, message) = match total_weight.cmp(&set.product_weight) {
        Ordering::Equal => (WeightStatus::Exact, MSG_WEIGHTS_EXACT.to_string()),
        Ordering::Less => (
            WeightStatus::UnderCapacity,
            format!(
                "Material weights are valid. Remaining capacity: {} kg",
                fixed(remaining_weight, precision)
            ),
        ),
        Ordering::Greater => (
            WeightStatus::Exceeded,
            format!(
                "Material weights exceed product weight by {} kg",
                fixed(total_weight.saturating_sub(set.product_weight), precision)
            ),
        ),
    };

    WeightReport {
        valid: status != WeightStatus::Exceeded,
        status,
        message,
        product_weight: set.product_weight,
        total_weight,
        remaining_weight,
    }
}

/// Compare the set's total percentage with 100.
pub fn percentage_report(set: &ProductCompositionSet) -> PercentageReport {
    let total_percentage = compute_totals(set).total_percentage;
    PercentageReport {
        valid: total_percentage <= MAX_PERCENTAGE,
        total_percentage,
        remaining_percentage: MAX_PERCENTAGE.saturating_sub(total_percentage),
    }
}

pub fn full_validation(set: &ProductCompositionSet, weight_precision: u32) -> FullValidation {
    FullValidation {
        percentage: percentage_report(set),
        weight: weight_report(set, weight_precision),
    }
}

/// Check every set invariant over the active lines. Lines are checked in
/// order (material, weight bounds, percentage bounds, repeat of an earlier
/// material), then the total weight, then the total percentage. The first
/// violation found is returned.
pub fn validate_set(
    set: &ProductCompositionSet,
    weight_precision: u32,
    percentage_precision: u32,
) -> Result<(), CompositionError> {
    let w = |v: Decimal| round(v, weight_precision);
    let p = |v: Decimal| round(v, percentage_precision);

    let mut seen: HashMap<MaterialId, usize> = HashMap::new();
    for (index, line) in set.active_lines() {
        let Some(material_id) = line.material() else {
            return Err(CompositionError::MissingMaterial { index });
        };
        if line.weight <= Decimal::ZERO {
            return Err(CompositionError::NonPositiveWeight {
                index,
                weight: w(line.weight),
            });
        }
        if line.weight > set.product_weight {
            return Err(CompositionError::LineWeightExceedsProduct {
                index,
                weight: w(line.weight),
                product_weight: w(set.product_weight),
            });
        }
        if line.percentage <= Decimal::ZERO || line.percentage > MAX_PERCENTAGE {
            return Err(CompositionError::PercentageOutOfRange {
                index,
                percentage: p(line.percentage),
            });
        }
        if let Some(&first) = seen.get(&material_id) {
            return Err(CompositionError::DuplicateMaterial {
                material_id,
                first,
                second: index,
            });
        }
        seen.insert(material_id, index);
    }

    let totals = compute_totals(set);
    if totals.total_weight > set.product_weight {
        return Err(CompositionError::TotalWeightExceeded {
            total: w(totals.total_weight),
            product_weight: w(set.product_weight),
            excess: w(totals.total_weight.saturating_sub(set.product_weight)),
        });
    }
    if totals.total_percentage > MAX_PERCENTAGE {
        return Err(CompositionError::TotalPercentageExceeded {
            total: p(totals.total_percentage),
            excess: p(totals.total_percentage.saturating_sub(MAX_PERCENTAGE)),
        });
    }

    Ok(())
}

fn round(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}
