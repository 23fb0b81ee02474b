use epr_core::constants::MSG_MATERIAL_REQUIRED;
use epr_core::models::{CompositionErrorKind, CompositionLine, FieldError};

/// A material must be selected; `0` counts as unselected.
pub fn check(pending: &CompositionLine) -> Option<FieldError> {
    match pending.material() {
        Some(_) => None,
        None => Some(FieldError::new(
            CompositionErrorKind::MissingMaterial,
            MSG_MATERIAL_REQUIRED,
        )),
    }
}
