use epr_composition::engine::CompositionValidator;
use epr_composition::summarize_by_product;
use epr_core::models::{
    CompositionErrorKind, CompositionField, CompositionLine, ProductCompositionRecord,
    ProductCompositionSet, ProductId,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Amount with two decimal places, in [0.01, max_cents / 100].
fn amount(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (1..=max_cents).prop_map(|c| Decimal::new(c, 2))
}

/// A product weight plus committed lines whose sums stay within bounds.
/// Amounts are built in hundredths so every value is exact; each line takes
/// at most a quarter of what is left and never less than 0.01.
fn bounded_set() -> impl Strategy<Value = ProductCompositionSet> {
    (100i64..=10_000_000, prop::collection::vec((1i64..=1000, 1i64..=25), 0..6)).prop_map(
        |(product_cents, shares)| {
            let mut left_weight = product_cents;
            let mut left_pct = 10_000i64;
            let lines = shares
                .into_iter()
                .enumerate()
                .map(|(i, (per_mille, pct_of_left))| {
                    let weight = (left_weight * per_mille / 4_000).max(1);
                    let pct = (left_pct * pct_of_left / 100).max(1);
                    left_weight -= weight;
                    left_pct -= pct;
                    CompositionLine::new(i as u32 + 1, Decimal::new(weight, 2), Decimal::new(pct, 2))
                })
                .collect();
            ProductCompositionSet::new(1, Decimal::new(product_cents, 2)).with_lines(lines)
        },
    )
}

proptest! {
    #[test]
    fn totals_are_idempotent(set in bounded_set()) {
        let v = CompositionValidator::default();
        prop_assert_eq!(v.compute_totals(&set), v.compute_totals(&set));
    }

    #[test]
    fn line_within_remaining_capacity_is_valid(set in bounded_set(), w in 1u32..=100, p in 1u32..=100) {
        let v = CompositionValidator::default();
        let remaining = v.remaining_capacity(&set);
        prop_assume!(remaining.remaining_weight > Decimal::ZERO);
        prop_assume!(remaining.remaining_percentage > Decimal::ZERO);

        // A fraction of what is left, never zero.
        let weight = (remaining.remaining_weight * Decimal::new(w as i64, 2)).max(Decimal::new(1, 10));
        let weight = weight.min(remaining.remaining_weight);
        let pct = (remaining.remaining_percentage * Decimal::new(p as i64, 2)).max(Decimal::new(1, 10));
        let pct = pct.min(remaining.remaining_percentage);

        let pending = CompositionLine::new(10_000, weight, pct);
        let result = v.validate_line(&set, &pending, None);
        prop_assert!(result.is_valid(), "{:?}", result);
    }

    #[test]
    fn weight_overflow_reports_remaining_capacity(set in bounded_set(), extra in amount(10_000)) {
        let v = CompositionValidator::default();
        let totals = v.compute_totals(&set);
        let remaining = set.product_weight - totals.total_weight;
        let weight = remaining + extra;
        prop_assume!(weight <= set.product_weight);

        let pending = CompositionLine::new(10_000, weight, Decimal::ONE);
        let result = v.validate_line(&set, &pending, None);
        let err = result.error(CompositionField::Weight);
        prop_assert!(err.is_some());
        let err = err.unwrap();
        prop_assert_eq!(err.kind, CompositionErrorKind::InvalidWeight);
        prop_assert_eq!(err.max_allowed, Some(remaining));
    }

    #[test]
    fn percentage_overflow_reports_remaining_capacity(set in bounded_set(), extra in amount(1_000)) {
        let v = CompositionValidator::default();
        let totals = v.compute_totals(&set);
        let remaining = Decimal::ONE_HUNDRED - totals.total_percentage;
        let pct = remaining + extra;
        prop_assume!(pct <= Decimal::ONE_HUNDRED);

        let pending = CompositionLine::new(10_000, Decimal::new(1, 4), pct);
        let result = v.validate_line(&set, &pending, None);
        let err = result.error(CompositionField::Percentage);
        prop_assert!(err.is_some());
        let err = err.unwrap();
        prop_assert_eq!(err.kind, CompositionErrorKind::InvalidPercentage);
        prop_assert_eq!(err.max_allowed, Some(remaining));
    }

    #[test]
    fn re_submitting_an_unchanged_line_as_an_edit_is_valid(set in bounded_set()) {
        prop_assume!(!set.is_empty());
        let v = CompositionValidator::default();
        for (index, line) in set.lines.iter().enumerate() {
            let result = v.validate_line(&set, line, Some(index));
            prop_assert!(result.is_valid(), "line {}: {:?}", index, result);
        }
    }

    #[test]
    fn committed_sets_pass_the_whole_set_check(set in bounded_set()) {
        let v = CompositionValidator::default();
        let mut rebuilt = ProductCompositionSet::new(1, set.product_weight);
        for line in set.lines.clone() {
            prop_assert!(v.commit_line(&mut rebuilt, line, None).unwrap().is_valid());
        }
        prop_assert!(v.validate_set(&rebuilt).is_ok());
        prop_assert_eq!(rebuilt.lines, set.lines);
    }

    #[test]
    fn summary_matches_per_product_totals(a in bounded_set(), b in bounded_set()) {
        let v = CompositionValidator::default();
        let records: Vec<ProductCompositionRecord> = a
            .lines
            .iter()
            .map(|l| ProductCompositionRecord::new(1, l.clone()))
            .chain(b.lines.iter().map(|l| ProductCompositionRecord::new(2, l.clone())))
            .collect();
        let summary = summarize_by_product(&records);

        for (id, set) in [(1u32, &a), (2u32, &b)] {
            let rebuilt = ProductCompositionSet::from_records(ProductId(id), set.product_weight, &records);
            let totals = v.compute_totals(&rebuilt);
            match summary.get(&ProductId(id)) {
                Some(s) => {
                    prop_assert_eq!(s.total_weight, totals.total_weight);
                    prop_assert_eq!(s.total_percentage, totals.total_percentage);
                    prop_assert_eq!(s.line_count, set.lines.len());
                }
                None => prop_assert!(set.lines.is_empty()),
            }
        }
    }
}
