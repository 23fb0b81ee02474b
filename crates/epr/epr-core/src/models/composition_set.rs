use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{CompositionLine, ProductCompositionRecord, ProductId};
use crate::errors::EprResult;

/// All composition lines of one product, plus the product's declared weight.
///
/// Assembled by the caller when a product is opened for editing and owned
/// by it until submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductCompositionSet {
    pub product_id: ProductId,
    #[ts(type = "string")]
    pub product_weight: Decimal,
    #[serde(default)]
    pub lines: Vec<CompositionLine>,
}

impl ProductCompositionSet {
    pub fn new(product_id: impl Into<ProductId>, product_weight: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            product_weight,
            lines: Vec::new(),
        }
    }

    pub fn with_lines(mut self, lines: Vec<CompositionLine>) -> Self {
        self.lines = lines;
        self
    }

    /// Build the set for `product_id` out of fetched records.
    /// Records belonging to other products are skipped.
    pub fn from_records<'a, I>(product_id: ProductId, product_weight: Decimal, records: I) -> Self
    where
        I: IntoIterator<Item = &'a ProductCompositionRecord>,
    {
        let lines = records
            .into_iter()
            .filter(|r| r.product_id == product_id)
            .map(|r| r.line.clone())
            .collect();
        Self {
            product_id,
            product_weight,
            lines,
        }
    }

    pub fn from_json(json: &str) -> EprResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Lines that take part in sums and duplicate checks, with their index.
    pub fn active_lines(&self) -> impl Iterator<Item = (usize, &CompositionLine)> {
        self.lines.iter().enumerate().filter(|(_, l)| l.is_active)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
