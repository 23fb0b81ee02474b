mod composition_error;
mod epr_error;

pub use composition_error::CompositionError;
pub use epr_error::{EprError, EprResult};
