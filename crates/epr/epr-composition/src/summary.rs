//! Per-product aggregation over a flat list of composition records.

use std::collections::HashMap;

use epr_core::models::{ProductCompositionRecord, ProductId, ProductSummary};

/// Group active records by product and sum weight and percentage.
///
/// Products whose records are all inactive do not appear. The map has no
/// meaningful order. Sums saturate at `Decimal::MAX` instead of overflowing.
pub fn summarize_by_product<'a, I>(records: I) -> HashMap<ProductId, ProductSummary>
where
    I: IntoIterator<Item = &'a ProductCompositionRecord>,
{
    let mut summary: HashMap<ProductId, ProductSummary> = HashMap::new();

    for record in records.into_iter().filter(|r| r.line.is_active) {
        let entry = summary.entry(record.product_id).or_default();
        entry.total_weight = entry.total_weight.saturating_add(record.line.weight);
        entry.total_percentage = entry.total_percentage.saturating_add(record.line.percentage);
        entry.line_count += 1;
    }

    summary
}
