use epr_core::errors::*;
use epr_core::models::MaterialId;
use rust_decimal::Decimal;

#[test]
fn invalid_product_weight_carries_value() {
    let err = EprError::InvalidProductWeight {
        product_weight: Decimal::ZERO,
    };
    assert!(err.to_string().contains("got 0 kg"));
}

#[test]
fn index_out_of_range_carries_index_and_len() {
    let err = EprError::IndexOutOfRange { index: 4, len: 2 };
    let msg = err.to_string();
    assert!(msg.contains('4'));
    assert!(msg.contains('2'));
}

#[test]
fn total_weight_exceeded_message() {
    let err = CompositionError::TotalWeightExceeded {
        total: Decimal::new(7000, 3),
        product_weight: Decimal::new(5000, 3),
        excess: Decimal::new(2000, 3),
    };
    assert_eq!(
        err.to_string(),
        "Total material weight (7.000 kg) exceeds product weight (5.000 kg) by 2.000 kg. \
         Please adjust material weights to not exceed the product weight."
    );
}

#[test]
fn duplicate_material_names_both_lines() {
    let err = CompositionError::DuplicateMaterial {
        material_id: MaterialId(5),
        first: 0,
        second: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains("material 5"));
    assert!(msg.contains("lines 0 and 3"));
}

// --- From impls ---

#[test]
fn composition_error_converts_to_epr_error() {
    let err: EprError = CompositionError::MissingMaterial { index: 1 }.into();
    assert!(matches!(err, EprError::Composition(_)));
    assert!(err.to_string().contains("line 1: material is required"));
}

#[test]
fn serde_error_converts_to_epr_error() {
    let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err: EprError = serde_err.into();
    assert!(matches!(err, EprError::Serialization(_)));
}
