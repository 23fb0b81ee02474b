//! Aggregate sums over a set's active lines.

use epr_core::constants::MAX_PERCENTAGE;
use epr_core::models::{CompositionTotals, ProductCompositionSet, RemainingCapacity};
use rust_decimal::Decimal;

/// Total weight and percentage of all active lines. An empty set yields zeros.
///
/// Sums are exact up to `Decimal::MAX` (about 7.9e28) and saturate there.
pub fn compute_totals(set: &ProductCompositionSet) -> CompositionTotals {
    totals_excluding(set, None)
}

/// Totals with the line at `excluded` left out, used when that line is
/// being replaced by an edit. Saturates like [`compute_totals`].
pub fn totals_excluding(set: &ProductCompositionSet, excluded: Option<usize>) -> CompositionTotals {
    set.active_lines()
        .filter(|(index, _)| Some(*index) != excluded)
        .fold(CompositionTotals::default(), |acc, (_, line)| {
            CompositionTotals {
                total_weight: acc.total_weight.saturating_add(line.weight),
                total_percentage: acc.total_percentage.saturating_add(line.percentage),
            }
        })
}

/// Weight and percentage still available on the product.
pub fn remaining_capacity(set: &ProductCompositionSet) -> RemainingCapacity {
    let totals = compute_totals(set);
    RemainingCapacity {
        remaining_weight: set.product_weight.saturating_sub(totals.total_weight),
        remaining_percentage: MAX_PERCENTAGE.saturating_sub(totals.total_percentage),
    }
}

/// `a + b > bound`, counting an overflowing sum as above any bound.
pub(crate) fn exceeds(a: Decimal, b: Decimal, bound: Decimal) -> bool {
    a.checked_add(b).map_or(true, |sum| sum > bound)
}
