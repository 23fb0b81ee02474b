use epr_core::constants::MSG_DUPLICATE_MATERIAL;
use epr_core::models::{CompositionErrorKind, CompositionLine, FieldError, ProductCompositionSet};

/// The pending material must not already be used by another active line.
///
/// The line at `editing_index` is the one being replaced, so it is never
/// compared against the pending line. Edits are still checked against the
/// other lines, not only new lines: an edit that switches to a material
/// already in use is rejected too.
pub fn check(
    set: &ProductCompositionSet,
    pending: &CompositionLine,
    editing_index: Option<usize>,
) -> Option<FieldError> {
    let material = pending.material()?;
    let taken = set
        .active_lines()
        .filter(|(index, _)| Some(*index) != editing_index)
        .any(|(_, line)| line.material() == Some(material));

    taken.then(|| FieldError::new(CompositionErrorKind::DuplicateMaterial, MSG_DUPLICATE_MATERIAL))
}
