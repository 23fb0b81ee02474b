use rust_decimal::Decimal;

/// Upper bound for a single line's percentage and for the sum over a product.
pub const MAX_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

/// Messages shown next to form fields.
pub const MSG_MATERIAL_REQUIRED: &str = "Material is required";
pub const MSG_DUPLICATE_MATERIAL: &str = "This material is already used in this product";
pub const MSG_WEIGHT_NOT_POSITIVE: &str = "Weight must be greater than 0";
pub const MSG_PERCENTAGE_NOT_POSITIVE: &str = "Composition percentage must be greater than 0";
pub const MSG_PERCENTAGE_ABOVE_MAX: &str = "Composition percentage cannot exceed 100%";
pub const MSG_WEIGHTS_EXACT: &str = "Material weights perfectly match product weight";
