//! Percentage derived from a weight.
//!
//! Weight and percentage are independent user inputs; this is an explicit
//! helper for callers that want to prefill one from the other. The engine
//! never calls it on its own.

use epr_core::errors::{EprError, EprResult};
use rust_decimal::Decimal;

/// `weight / product_weight * 100`.
///
/// A zero or negative product weight is a data error and is returned as
/// [`EprError::InvalidProductWeight`] instead of producing an infinite share.
pub fn derive_percentage_from_weight(weight: Decimal, product_weight: Decimal) -> EprResult<Decimal> {
    if product_weight <= Decimal::ZERO {
        return Err(EprError::InvalidProductWeight { product_weight });
    }
    weight
        .checked_div(product_weight)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|p| p.normalize())
        .ok_or(EprError::Overflow {
            operation: "derive percentage from weight",
        })
}
