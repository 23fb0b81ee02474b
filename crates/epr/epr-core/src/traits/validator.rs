use crate::models::{CompositionLine, CompositionTotals, LineValidation, ProductCompositionSet};

/// Product composition validation.
///
/// Implementations are pure: every call depends only on its arguments.
pub trait ICompositionValidator: Send + Sync {
    /// Sum weight and percentage over the set's active lines.
    fn compute_totals(&self, set: &ProductCompositionSet) -> CompositionTotals;

    /// Check a pending line against the committed set.
    ///
    /// `editing_index` names the line the pending one replaces; its prior
    /// contribution is excluded from the aggregate checks.
    fn validate_line(
        &self,
        set: &ProductCompositionSet,
        pending: &CompositionLine,
        editing_index: Option<usize>,
    ) -> LineValidation;
}
