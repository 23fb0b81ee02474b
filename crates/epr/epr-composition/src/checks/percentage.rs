use epr_core::constants::{MAX_PERCENTAGE, MSG_PERCENTAGE_ABOVE_MAX, MSG_PERCENTAGE_NOT_POSITIVE};
use epr_core::models::{CompositionErrorKind, CompositionLine, FieldError, ProductCompositionSet};
use rust_decimal::Decimal;

use super::fixed;
use crate::totals::{exceeds, totals_excluding};

/// Percentage must lie in (0, 100] and keep the product's total within 100.
pub fn check(
    set: &ProductCompositionSet,
    pending: &CompositionLine,
    editing_index: Option<usize>,
    precision: u32,
) -> Option<FieldError> {
    let percentage = pending.percentage;

    if percentage <= Decimal::ZERO {
        return Some(FieldError::new(
            CompositionErrorKind::InvalidPercentage,
            MSG_PERCENTAGE_NOT_POSITIVE,
        ));
    }

    if percentage > MAX_PERCENTAGE {
        return Some(FieldError::new(
            CompositionErrorKind::InvalidPercentage,
            MSG_PERCENTAGE_ABOVE_MAX,
        ));
    }

    let current = totals_excluding(set, editing_index).total_percentage;
    if exceeds(current, percentage, MAX_PERCENTAGE) {
        let max_allowed = MAX_PERCENTAGE.saturating_sub(current);
        return Some(
            FieldError::new(
                CompositionErrorKind::InvalidPercentage,
                format!(
                    "Total would exceed 100%. Current total: {}%, max allowed: {}%",
                    fixed(current, precision),
                    fixed(max_allowed, precision)
                ),
            )
            .with_max_allowed(max_allowed),
        );
    }

    None
}
