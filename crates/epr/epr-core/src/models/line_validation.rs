use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A form field that a validation message is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum CompositionField {
    MaterialId,
    Weight,
    Percentage,
}

impl CompositionField {
    /// Map a rejection message returned by the persistence API onto the
    /// field it concerns, so it can be shown inline. `None` means the
    /// message is not field-specific.
    pub fn from_api_message(message: &str) -> Option<Self> {
        let lower = message.to_lowercase();
        if lower.contains("exceed 100") || lower.contains("percentage") {
            Some(Self::Percentage)
        } else if lower.contains("weight") {
            Some(Self::Weight)
        } else if lower.contains("already exists") {
            Some(Self::MaterialId)
        } else {
            None
        }
    }
}

/// Category of a field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CompositionErrorKind {
    /// No material selected.
    MissingMaterial,
    /// Non-positive, above the product weight, or pushes the total above it.
    InvalidWeight,
    /// Outside (0, 100], or pushes the total above 100.
    InvalidPercentage,
    /// A new line reuses a material already present in the set.
    DuplicateMaterial,
}

/// One field's failure, ready to be shown next to the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub kind: CompositionErrorKind,
    pub message: String,
    /// Remaining capacity when the failure is an aggregate overflow.
    #[ts(type = "string | null")]
    pub max_allowed: Option<Decimal>,
}

impl FieldError {
    pub fn new(kind: CompositionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            max_allowed: None,
        }
    }

    pub fn with_max_allowed(mut self, max_allowed: Decimal) -> Self {
        self.max_allowed = Some(max_allowed);
        self
    }
}

/// Field-level failures, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldErrors(BTreeMap<CompositionField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. The first failure recorded for a field wins.
    pub fn insert(&mut self, field: CompositionField, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    pub fn get(&self, field: CompositionField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn kind(&self, field: CompositionField) -> Option<CompositionErrorKind> {
        self.0.get(&field).map(|e| e.kind)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of validating one pending line against a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", content = "errors", rename_all = "snake_case")]
pub enum LineValidation {
    Valid,
    Invalid(FieldErrors),
}

impl LineValidation {
    pub fn from_errors(errors: FieldErrors) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Valid => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Convenience lookup; `None` when valid or when the field passed.
    pub fn error(&self, field: CompositionField) -> Option<&FieldError> {
        self.errors().and_then(|e| e.get(field))
    }
}
