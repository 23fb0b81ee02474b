use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{MaterialId, ProductId};
use crate::errors::EprResult;

/// One material's contribution to a product.
///
/// `weight` and `percentage` are required when deserializing: a record with
/// a missing or `null` amount is rejected instead of reaching arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompositionLine {
    /// `None` or `Some(MaterialId(0))` means no material was selected.
    #[serde(default)]
    pub material_id: Option<MaterialId>,
    /// Mass contributed by this material, in kilograms.
    #[ts(type = "string")]
    pub weight: Decimal,
    /// Declared share of the product's composition, 0–100.
    #[serde(alias = "compositionPercentage")]
    #[ts(type = "string")]
    pub percentage: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    /// Soft-delete flag. Inactive lines are ignored by every aggregation.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CompositionLine {
    pub fn new(material_id: impl Into<MaterialId>, weight: Decimal, percentage: Decimal) -> Self {
        Self {
            material_id: Some(material_id.into()),
            weight,
            percentage,
            notes: None,
            is_active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// The selected material, treating `0` as unset.
    pub fn material(&self) -> Option<MaterialId> {
        self.material_id.filter(|id| !id.is_unset())
    }

    /// Parse a single line from its JSON form.
    pub fn from_json(json: &str) -> EprResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A persisted composition row: the line plus the product it belongs to.
///
/// On the wire the line's fields sit next to `productId` (see
/// [`ProductCompositionRow`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProductCompositionRow", into = "ProductCompositionRow")]
pub struct ProductCompositionRecord {
    pub product_id: ProductId,
    pub line: CompositionLine,
}

impl ProductCompositionRecord {
    pub fn new(product_id: impl Into<ProductId>, line: CompositionLine) -> Self {
        Self {
            product_id: product_id.into(),
            line,
        }
    }
}

/// JSON shape of a [`ProductCompositionRecord`], as the persistence API
/// sends it.
///
/// Must not use `#[serde(flatten)]`: flattened fields are buffered, and a
/// buffered JSON number no longer reads as an exact decimal or an integer id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductCompositionRow {
    pub product_id: ProductId,
    #[serde(default)]
    pub material_id: Option<MaterialId>,
    #[ts(type = "string")]
    pub weight: Decimal,
    #[serde(alias = "compositionPercentage")]
    #[ts(type = "string")]
    pub percentage: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl From<ProductCompositionRow> for ProductCompositionRecord {
    fn from(row: ProductCompositionRow) -> Self {
        Self {
            product_id: row.product_id,
            line: CompositionLine {
                material_id: row.material_id,
                weight: row.weight,
                percentage: row.percentage,
                notes: row.notes,
                is_active: row.is_active,
            },
        }
    }
}

impl From<ProductCompositionRecord> for ProductCompositionRow {
    fn from(record: ProductCompositionRecord) -> Self {
        let line = record.line;
        Self {
            product_id: record.product_id,
            material_id: line.material_id,
            weight: line.weight,
            percentage: line.percentage,
            notes: line.notes,
            is_active: line.is_active,
        }
    }
}
