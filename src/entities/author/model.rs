//! Author entity model

use crate::core::entity::{Entity, FromFields};
use crate::core::error::ValidationError;
use crate::core::validation::{FieldKind, FieldSpec, Fields, Schema};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const AUTHOR_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", FieldKind::String),
    FieldSpec::required("birth_year", FieldKind::Integer),
    FieldSpec::required("nationality", FieldKind::String),
];

pub static AUTHOR_SCHEMA: Schema = Schema::new(AUTHOR_FIELDS);

/// An author. Authors only support full replacement, never PATCH.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub birth_year: i64,
    pub nationality: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorDraft {
    pub name: String,
    pub birth_year: i64,
    pub nationality: String,
}

impl FromFields for AuthorDraft {
    fn from_fields(fields: &Fields) -> Result<Self, ValidationError> {
        AUTHOR_SCHEMA.validate_full(fields)?;
        AUTHOR_SCHEMA.extract(fields)
    }
}

impl Entity for Author {
    type Draft = AuthorDraft;

    fn resource_name() -> &'static str {
        "authors"
    }

    fn resource_name_singular() -> &'static str {
        "author"
    }

    fn display_name() -> &'static str {
        "Author"
    }

    fn create(id: String, draft: AuthorDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            birth_year: draft.birth_year,
            nationality: draft.nationality,
            created_at: now,
            updated_at: now,
        }
    }

    fn replace(&mut self, draft: AuthorDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.birth_year = draft.birth_year;
        self.nationality = draft.nationality;
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
