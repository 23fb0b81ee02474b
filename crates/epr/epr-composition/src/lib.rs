//! # epr-composition
//!
//! Validation of a product's material composition.
//!
//! A product is made of composition lines, one per material, each with a
//! weight (kg) and a declared percentage. A pending line is accepted only if:
//! 1. **Material**: a material is selected and no other active line uses it
//! 2. **Weight**: positive, within the product weight, and the sum stays within it
//! 3. **Percentage**: in (0, 100] and the sum stays within 100
//!
//! All failing fields are reported together. Sums use exact decimals.

pub mod checks;
pub mod derive;
pub mod engine;
pub mod report;
pub mod summary;
pub mod totals;

pub use derive::derive_percentage_from_weight;
pub use engine::CompositionValidator;
pub use summary::summarize_by_product;
pub use totals::{compute_totals, remaining_capacity};
