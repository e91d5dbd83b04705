//! Validation engine.
//!
//! `validate` maps the current values onto an error map using the static
//! schema. It is pure: no I/O, no hidden state, same input same output.
//! Per field the required check runs first and the format check only runs
//! on non-empty values, so each field carries at most one error.

mod rules;


use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::{FieldDefinition, FieldId, REGISTRATION_SCHEMA};
use crate::values::FormValues;

/// Which check rejected a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    RequiredMissing,
    FormatInvalid,
}

/// A user-facing validation message for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    fn required(def: &FieldDefinition) -> Self {
        Self {
            kind: ErrorKind::RequiredMissing,
            message: format!("{} is required", def.label),
        }
    }

    fn format(message: String) -> Self {
        Self {
            kind: ErrorKind::FormatInvalid,
            message,
        }
    }
}

/// Field → error, only for fields that fail. Ordered by form position.
pub type ErrorMap = BTreeMap<FieldId, FieldError>;

/// Validate every field of the registration schema.
pub fn validate(values: &FormValues) -> ErrorMap {
    validate_with(&REGISTRATION_SCHEMA, values)
}

/// Validate `values` against an explicit list of definitions.
pub fn validate_with(schema: &[FieldDefinition], values: &FormValues) -> ErrorMap {
    schema
        .iter()
        .filter_map(|def| validate_field(def, values.get(def.id)).map(|err| (def.id, err)))
        .collect()
}

/// Run the required check, then the format check, on a single value.
pub fn validate_field(def: &FieldDefinition, value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return def.required.then(|| FieldError::required(def));
    }

    let pattern = def.format?;
    rules::check(pattern, def.label, value).map(FieldError::format)
}
