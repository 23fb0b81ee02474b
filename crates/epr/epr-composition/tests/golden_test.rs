//! Golden dataset tests for epr-composition.
//!
//! Loads each composition golden file, runs validation, and verifies the
//! output matches the expected field errors.

use epr_composition::engine::CompositionValidator;
use epr_core::models::{
    CompositionErrorKind, CompositionField, CompositionLine, ProductCompositionRecord,
    ProductCompositionSet, ProductId,
};
use rust_decimal::Decimal;
use serde_json::Value;
use test_fixtures::{list_fixtures, load_fixture_value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn field(name: &str) -> CompositionField {
    serde_json::from_value(Value::String(name.to_string()))
        .unwrap_or_else(|e| panic!("unknown field {name}: {e}"))
}

fn kind(name: &str) -> CompositionErrorKind {
    serde_json::from_value(Value::String(name.to_string()))
        .unwrap_or_else(|e| panic!("unknown kind {name}: {e}"))
}

fn decimal(v: &Value) -> Option<Decimal> {
    v.as_str().map(|s| s.parse().unwrap())
}

fn run_line_fixture(path: &str) {
    let fixture = load_fixture_value(path);
    let input = &fixture["input"];
    let set: ProductCompositionSet = serde_json::from_value(input["set"].clone()).unwrap();
    let pending: CompositionLine = serde_json::from_value(input["pending"].clone()).unwrap();
    let editing_index = input["editing_index"].as_u64().map(|i| i as usize);

    let result = CompositionValidator::default().validate_line(&set, &pending, editing_index);

    let expected = &fixture["expected"];
    assert_eq!(
        result.is_valid(),
        expected["valid"].as_bool().unwrap(),
        "{path}: {result:?}"
    );

    let expected_errors = expected["errors"].as_object().unwrap();
    let actual_count = result.errors().map_or(0, |e| e.len());
    assert_eq!(actual_count, expected_errors.len(), "{path}: {result:?}");

    for (name, exp) in expected_errors {
        let err = result
            .error(field(name))
            .unwrap_or_else(|| panic!("{path}: missing error on {name}"));
        assert_eq!(err.kind, kind(exp["kind"].as_str().unwrap()), "{path}/{name}");
        assert_eq!(err.max_allowed, decimal(&exp["max_allowed"]), "{path}/{name}");
        let needle = exp["message_contains"].as_str().unwrap();
        assert!(
            err.message.contains(needle),
            "{path}/{name}: {:?} should contain {:?}",
            err.message,
            needle
        );
    }
}

// ---------------------------------------------------------------------------
// Line validation
// ---------------------------------------------------------------------------

#[test]
fn golden_empty_set_valid() {
    run_line_fixture("golden/composition/empty_set_valid.json");
}

#[test]
fn golden_aggregate_overflow() {
    run_line_fixture("golden/composition/aggregate_overflow.json");
}

#[test]
fn golden_edit_excludes_own_line() {
    run_line_fixture("golden/composition/edit_excludes_own_line.json");
}

#[test]
fn golden_duplicate_material() {
    run_line_fixture("golden/composition/duplicate_material.json");
}

#[test]
fn golden_invalid_inputs() {
    run_line_fixture("golden/composition/invalid_inputs.json");
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[test]
fn golden_summary_by_product() {
    let fixture = load_fixture_value("golden/composition/summary_by_product.json");
    let records: Vec<ProductCompositionRecord> =
        serde_json::from_value(fixture["input"]["records"].clone()).unwrap();

    let summary = CompositionValidator::default().summarize_by_product(&records);
    let expected = fixture["expected"]["summaries"].as_object().unwrap();
    assert_eq!(summary.len(), expected.len());

    for (id, exp) in expected {
        let product = ProductId(id.parse().unwrap());
        let actual = summary
            .get(&product)
            .unwrap_or_else(|| panic!("missing product {id}"));
        assert_eq!(Some(actual.total_weight), decimal(&exp["total_weight"]), "product {id}");
        assert_eq!(
            Some(actual.total_percentage),
            decimal(&exp["total_percentage"]),
            "product {id}"
        );
        assert_eq!(actual.line_count as u64, exp["line_count"].as_u64().unwrap());
    }
}

#[test]
fn every_line_fixture_is_covered() {
    let line_fixtures = list_fixtures("golden/composition")
        .into_iter()
        .filter(|p| !p.ends_with("summary_by_product.json"))
        .count();
    assert_eq!(line_fixtures, 5);
}
