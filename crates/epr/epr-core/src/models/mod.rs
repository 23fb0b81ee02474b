mod composition_line;
mod composition_set;
mod ids;
mod line_validation;
mod reports;
mod totals;

pub use composition_line::{CompositionLine, ProductCompositionRecord, ProductCompositionRow};
pub use composition_set::ProductCompositionSet;
pub use ids::{MaterialId, ProductId};
pub use line_validation::{
    CompositionErrorKind, CompositionField, FieldError, FieldErrors, LineValidation,
};
pub use reports::{FullValidation, PercentageReport, WeightReport, WeightStatus};
pub use totals::{CompositionTotals, ProductSummary, RemainingCapacity};
