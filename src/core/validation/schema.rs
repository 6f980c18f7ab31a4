//! Field schemas describing the writable fields of each entity type

use super::validators::{non_null, of_kind, required};
use crate::core::error::ValidationError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A JSON object payload, keyed by field name
pub type Fields = Map<String, Value>;

/// The JSON type a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A JSON string
    String,
    /// A JSON integer (no fractional part)
    Integer,
    /// Any JSON number
    Number,
}

impl FieldKind {
    /// Whether `value` has this kind
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_i64(),
            FieldKind::Number => value.is_number(),
        }
    }

    /// Human-readable description used in error messages
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::Integer => "an integer",
            FieldKind::Number => "a number",
        }
    }
}

/// Description of one writable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Must be present (and non-null) on create and full replacement
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// The ordered set of writable fields for an entity type.
///
/// Fields not listed in the schema are ignored by validation and dropped by
/// deserialization.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// Names of the fields required on create/replace, in schema order
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }

    /// Validate a payload for create or full replacement.
    ///
    /// Every required field must be present and non-null; all missing fields
    /// are reported together. Present fields must have the right kind. Null on
    /// an optional field is treated as absent.
    pub fn validate_full(&self, fields: &Fields) -> Result<(), ValidationError> {
        let is_present = required();
        let missing: Vec<String> = self
            .required_fields()
            .filter(|name| !is_present(fields.get(*name)))
            .map(str::to_string)
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        self.check_kinds(fields)
    }

    /// Validate a payload for partial update.
    ///
    /// Any subset of fields may be present, including none. Present fields must
    /// be non-null and of the right kind.
    pub fn validate_partial(&self, fields: &Fields) -> Result<(), ValidationError> {
        let not_null = non_null();
        for spec in self.fields {
            if let Some(value) = fields.get(spec.name) {
                not_null(spec.name, value)?;
            }
        }

        self.check_kinds(fields)
    }

    fn check_kinds(&self, fields: &Fields) -> Result<(), ValidationError> {
        for spec in self.fields {
            if let Some(value) = fields.get(spec.name) {
                of_kind(spec.kind)(spec.name, value)?;
            }
        }
        Ok(())
    }

    /// Deserialize the schema's fields out of a validated payload
    pub fn extract<T: DeserializeOwned>(&self, fields: &Fields) -> Result<T, ValidationError> {
        let known: Fields = fields
            .iter()
            .filter(|(key, value)| {
                !value.is_null() && self.fields.iter().any(|spec| spec.name == key.as_str())
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        serde_json::from_value(Value::Object(known)).map_err(|e| ValidationError::InvalidValue {
            field: "body".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("title", FieldKind::String),
        FieldSpec::required("isbn", FieldKind::String),
        FieldSpec::required("price", FieldKind::Number),
        FieldSpec::optional("stock", FieldKind::Integer),
    ];
    const SCHEMA: Schema = Schema::new(FIELDS);

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_required_fields_in_schema_order() {
        let names: Vec<_> = SCHEMA.required_fields().collect();
        assert_eq!(names, vec!["title", "isbn", "price"]);
    }

    #[test]
    fn test_full_reports_every_missing_field() {
        let err = SCHEMA
            .validate_full(&fields(json!({ "title": "1984", "isbn": null })))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec!["isbn".to_string(), "price".to_string()])
        );
    }

    #[test]
    fn test_full_accepts_missing_optional() {
        let payload = fields(json!({ "title": "1984", "isbn": "x", "price": 12.5 }));
        assert!(SCHEMA.validate_full(&payload).is_ok());
    }

    #[test]
    fn test_full_rejects_wrong_kind() {
        let payload = fields(json!({ "title": "1984", "isbn": "x", "price": "cheap" }));
        let err = SCHEMA.validate_full(&payload).unwrap_err();
        assert_eq!(err.fields(), vec!["price"]);
    }

    #[test]
    fn test_full_treats_null_optional_as_absent() {
        let payload = fields(json!({ "title": "1984", "isbn": "x", "price": 1, "stock": null }));
        assert!(SCHEMA.validate_full(&payload).is_ok());
    }

    #[test]
    fn test_partial_accepts_empty_payload() {
        assert!(SCHEMA.validate_partial(&Fields::new()).is_ok());
    }

    #[test]
    fn test_partial_rejects_null() {
        let err = SCHEMA
            .validate_partial(&fields(json!({ "stock": null })))
            .unwrap_err();
        assert!(matches!(err, ValidationError::NullField { .. }));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload = fields(json!({ "colour": 3 }));
        assert!(SCHEMA.validate_partial(&payload).is_ok());
    }

    #[test]
    fn test_extract_drops_unknown_and_null_fields() {
        #[derive(Deserialize)]
        struct Draft {
            title: String,
            #[serde(default)]
            stock: i64,
        }

        let payload = fields(json!({ "title": "1984", "stock": null, "colour": "red" }));
        let draft: Draft = SCHEMA.extract(&payload).unwrap();
        assert_eq!(draft.title, "1984");
        assert_eq!(draft.stock, 0);
    }
}
