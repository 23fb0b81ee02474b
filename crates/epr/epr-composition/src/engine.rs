//! CompositionValidator: implements ICompositionValidator, runs the
//! per-field checks, and exposes the whole-set reports.

use std::collections::HashMap;

use epr_core::config::CompositionConfig;
use epr_core::errors::{CompositionError, EprError, EprResult};
use epr_core::models::{
    CompositionField, CompositionLine, CompositionTotals, FieldErrors, FullValidation,
    LineValidation, PercentageReport, ProductCompositionRecord, ProductCompositionSet, ProductId,
    ProductSummary, RemainingCapacity, WeightReport,
};
use epr_core::traits::ICompositionValidator;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::checks::{duplicate, material, percentage, weight};
use crate::{derive, report, summary, totals};

/// Stateless product composition validator.
///
/// Holds only display configuration; every operation depends solely on its
/// arguments, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct CompositionValidator {
    config: CompositionConfig,
}

impl CompositionValidator {
    pub fn new(config: CompositionConfig) -> Self {
        Self { config }
    }

    /// Get the validator configuration.
    pub fn config(&self) -> &CompositionConfig {
        &self.config
    }

    /// Sum weight and percentage over the active lines.
    pub fn compute_totals(&self, set: &ProductCompositionSet) -> CompositionTotals {
        totals::compute_totals(set)
    }

    /// Validate a pending line against the committed set.
    ///
    /// - `editing_index = None`: the pending line is new.
    /// - `editing_index = Some(i)`: the pending line replaces line `i`, whose
    ///   prior weight and percentage are left out of the aggregate checks and
    ///   which is not compared against for duplicates.
    ///
    /// An index outside the set is treated as a new line.
    pub fn validate_line(
        &self,
        set: &ProductCompositionSet,
        pending: &CompositionLine,
        editing_index: Option<usize>,
    ) -> LineValidation {
        let editing_index = match editing_index {
            Some(index) if index >= set.len() => {
                warn!(
                    product_id = %set.product_id,
                    index,
                    len = set.len(),
                    "editing index out of range, validating as a new line"
                );
                None
            }
            other => other,
        };

        let mut errors = FieldErrors::new();

        if let Some(err) = material::check(pending) {
            errors.insert(CompositionField::MaterialId, err);
        }
        if let Some(err) = weight::check(set, pending, editing_index, self.config.weight_precision)
        {
            errors.insert(CompositionField::Weight, err);
        }
        if let Some(err) =
            percentage::check(set, pending, editing_index, self.config.percentage_precision)
        {
            errors.insert(CompositionField::Percentage, err);
        }
        if let Some(err) = duplicate::check(set, pending, editing_index) {
            errors.insert(CompositionField::MaterialId, err);
        }

        debug!(
            product_id = %set.product_id,
            editing = ?editing_index,
            failed_fields = errors.len(),
            "validated composition line"
        );

        LineValidation::from_errors(errors)
    }

    /// See [`derive::derive_percentage_from_weight`].
    pub fn derive_percentage_from_weight(
        &self,
        weight: Decimal,
        product_weight: Decimal,
    ) -> EprResult<Decimal> {
        derive::derive_percentage_from_weight(weight, product_weight)
    }

    /// See [`summary::summarize_by_product`].
    pub fn summarize_by_product<'a, I>(&self, records: I) -> HashMap<ProductId, ProductSummary>
    where
        I: IntoIterator<Item = &'a ProductCompositionRecord>,
    {
        summary::summarize_by_product(records)
    }

    pub fn remaining_capacity(&self, set: &ProductCompositionSet) -> RemainingCapacity {
        totals::remaining_capacity(set)
    }

    pub fn weight_report(&self, set: &ProductCompositionSet) -> WeightReport {
        report::weight_report(set, self.config.weight_precision)
    }

    pub fn percentage_report(&self, set: &ProductCompositionSet) -> PercentageReport {
        report::percentage_report(set)
    }

    pub fn full_validation(&self, set: &ProductCompositionSet) -> FullValidation {
        report::full_validation(set, self.config.weight_precision)
    }

    /// Check the whole set before submission.
    pub fn validate_set(&self, set: &ProductCompositionSet) -> Result<(), CompositionError> {
        let outcome = report::validate_set(
            set,
            self.config.weight_precision,
            self.config.percentage_precision,
        );
        match &outcome {
            Ok(()) => debug!(product_id = %set.product_id, lines = set.len(), "composition set valid"),
            Err(e) => info!(product_id = %set.product_id, error = %e, "composition set rejected"),
        }
        outcome
    }

    /// Validate `pending` and, if it passes, add it to `set` (new line) or
    /// replace line `editing_index` with it.
    ///
    /// An invalid line leaves the set untouched and is returned as
    /// `Ok(LineValidation::Invalid(..))`. Only an `editing_index` outside the
    /// set is an `Err`.
    pub fn commit_line(
        &self,
        set: &mut ProductCompositionSet,
        pending: CompositionLine,
        editing_index: Option<usize>,
    ) -> EprResult<LineValidation> {
        if let Some(index) = editing_index {
            if index >= set.len() {
                return Err(EprError::IndexOutOfRange {
                    index,
                    len: set.len(),
                });
            }
        }

        let outcome = self.validate_line(set, &pending, editing_index);
        if outcome.is_valid() {
            match editing_index {
                Some(index) => set.lines[index] = pending,
                None => set.lines.push(pending),
            }
        }
        Ok(outcome)
    }
}

impl ICompositionValidator for CompositionValidator {
    fn compute_totals(&self, set: &ProductCompositionSet) -> CompositionTotals {
        CompositionValidator::compute_totals(self, set)
    }

    fn validate_line(
        &self,
        set: &ProductCompositionSet,
        pending: &CompositionLine,
        editing_index: Option<usize>,
    ) -> LineValidation {
        CompositionValidator::validate_line(self, set, pending, editing_index)
    }
}
