//! Reusable field validators
//!
//! These validators are composed by [`Schema`](super::Schema) to check
//! entity payloads before anything reaches the store.

use super::FieldKind;
use crate::core::error::ValidationError;
use serde_json::Value;

/// Validator: field is required (present and not null)
///
/// Returns `false` for absent or null values so the caller can collect every
/// missing field before failing.
pub fn required() -> impl Fn(Option<&Value>) -> bool + Send + Sync + Clone {
    |value: Option<&Value>| matches!(value, Some(v) if !v.is_null())
}

/// Validator: field must not be explicitly null
pub fn non_null() -> impl Fn(&str, &Value) -> Result<(), ValidationError> + Send + Sync + Clone {
    |field: &str, value: &Value| {
        if value.is_null() {
            Err(ValidationError::NullField {
                field: field.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Validator: value must have the JSON type the field kind expects
///
/// Null passes through; pair with [`non_null`] where null is not allowed.
pub fn of_kind(
    kind: FieldKind,
) -> impl Fn(&str, &Value) -> Result<(), ValidationError> + Send + Sync + Clone {
    move |field: &str, value: &Value| {
        if value.is_null() || kind.accepts(value) {
            Ok(())
        } else {
            Err(ValidationError::InvalidType {
                field: field.to_string(),
                expected: kind.expected(),
            })
        }
    }
}
