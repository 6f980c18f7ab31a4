//! Entity traits defining the lifecycle shared by books and authors

use crate::core::error::ValidationError;
use crate::core::validation::Fields;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Something that can be built from a validated JSON field map.
pub trait FromFields: Sized {
    /// Validate `fields` and build `Self`, or report which fields are wrong.
    fn from_fields(fields: &Fields) -> Result<Self, ValidationError>;
}

/// Base trait for every stored entity.
///
/// All entities have:
/// - id: opaque unique identifier, immutable once assigned
/// - created_at: set once on creation
/// - updated_at: set on creation and on every successful mutation
///
/// The mutable body of an entity is described by [`Entity::Draft`], the
/// fully-specified payload accepted by create and replace.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// Full set of writable fields (create / replace body)
    type Draft: FromFields + Send;

    /// The plural resource name used in URLs (e.g., "books")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "book")
    fn resource_name_singular() -> &'static str;

    /// Display name used in messages (e.g., "Book")
    fn display_name() -> &'static str;

    /// Build a fresh entity; `created_at` and `updated_at` are both `now`.
    fn create(id: String, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Overwrite every mutable field, keeping id and created_at.
    fn replace(&mut self, draft: Self::Draft, now: DateTime<Utc>);

    // === Core Entity Fields ===

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> DateTime<Utc>;
}

/// Entities that accept partial updates (PATCH).
pub trait PartiallyUpdatable: Entity {
    /// Any subset of writable fields
    type Patch: FromFields + Send;

    /// Overwrite only the supplied fields and stamp `updated_at = now`.
    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

/// Generate a new opaque identifier
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{FieldKind, FieldSpec, Schema};
    use serde::Deserialize;
    use serde_json::json;

    const NOTE_FIELDS: &[FieldSpec] = &[FieldSpec::required("text", FieldKind::String)];
    static NOTE_SCHEMA: Schema = Schema::new(NOTE_FIELDS);

    #[derive(Debug, Deserialize)]
    struct NoteDraft {
        text: String,
    }

    impl FromFields for NoteDraft {
        fn from_fields(fields: &Fields) -> Result<Self, ValidationError> {
            NOTE_SCHEMA.validate_full(fields)?;
            NOTE_SCHEMA.extract(fields)
        }
    }

    #[derive(Debug, Clone, Serialize)]
    struct Note {
        id: String,
        text: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    impl Entity for Note {
        type Draft = NoteDraft;

        fn resource_name() -> &'static str {
            "notes"
        }

        fn resource_name_singular() -> &'static str {
            "note"
        }

        fn display_name() -> &'static str {
            "Note"
        }

        fn create(id: String, draft: NoteDraft, now: DateTime<Utc>) -> Self {
            Self {
                id,
                text: draft.text,
                created_at: now,
                updated_at: now,
            }
        }

        fn replace(&mut self, draft: NoteDraft, now: DateTime<Utc>) {
            self.text = draft.text;
            self.updated_at = now;
        }

        fn id(&self) -> &str {
            &self.id
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }

        fn updated_at(&self) -> DateTime<Utc> {
            self.updated_at
        }
    }

    #[test]
    fn test_create_stamps_both_timestamps() {
        let now = Utc::now();
        let draft = NoteDraft::from_fields(json!({ "text": "hi" }).as_object().unwrap()).unwrap();
        let note = Note::create(new_id(), draft, now);
        assert_eq!(note.created_at(), note.updated_at());
    }

    #[test]
    fn test_replace_keeps_id_and_created_at() {
        let created = Utc::now();
        let mut note = Note::create("n1".to_string(), NoteDraft { text: "a".into() }, created);
        let later = created + chrono::Duration::seconds(5);
        note.replace(NoteDraft { text: "b".into() }, later);

        assert_eq!(note.id(), "n1");
        assert_eq!(note.created_at(), created);
        assert_eq!(note.updated_at(), later);
        assert_eq!(note.text, "b");
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn test_entity_metadata() {
        assert_eq!(Note::resource_name(), "notes");
        assert_eq!(Note::resource_name_singular(), "note");
        assert_eq!(Note::display_name(), "Note");
    }
}
