use epr_core::constants::MSG_WEIGHT_NOT_POSITIVE;
use epr_core::models::{CompositionErrorKind, CompositionLine, FieldError, ProductCompositionSet};
use rust_decimal::Decimal;

use super::fixed;
use crate::totals::{exceeds, totals_excluding};

/// Weight must be positive, within the product weight, and keep the
/// product's total material weight within the product weight.
pub fn check(
    set: &ProductCompositionSet,
    pending: &CompositionLine,
    editing_index: Option<usize>,
    precision: u32,
) -> Option<FieldError> {
    let weight = pending.weight;
    let product_weight = set.product_weight;

    if weight <= Decimal::ZERO {
        return Some(FieldError::new(
            CompositionErrorKind::InvalidWeight,
            MSG_WEIGHT_NOT_POSITIVE,
        ));
    }

    if weight > product_weight {
        return Some(FieldError::new(
            CompositionErrorKind::InvalidWeight,
            format!(
                "Individual material weight ({} kg) cannot exceed product weight ({} kg)",
                fixed(weight, precision),
                fixed(product_weight, precision)
            ),
        ));
    }

    let current = totals_excluding(set, editing_index).total_weight;
    if exceeds(current, weight, product_weight) {
        let max_allowed = product_weight.saturating_sub(current);
        return Some(
            FieldError::new(
                CompositionErrorKind::InvalidWeight,
                format!(
                    "Total material weight would exceed product weight ({} kg). \
                     Current total: {} kg, max allowed: {} kg",
                    fixed(product_weight, precision),
                    fixed(current, precision),
                    fixed(max_allowed, precision)
                ),
            )
            .with_max_allowed(max_allowed),
        );
    }

    None
}
