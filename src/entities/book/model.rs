//! Book entity model with its field schema

use crate::core::entity::{Entity, FromFields, PartiallyUpdatable};
use crate::core::error::ValidationError;
use crate::core::field::Patch;
use crate::core::validation::{FieldKind, FieldSpec, Fields, Schema};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Writable Book fields. `stock` is the only optional one.
const BOOK_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", FieldKind::String),
    FieldSpec::required("author_id", FieldKind::String),
    FieldSpec::required("isbn", FieldKind::String),
    FieldSpec::required("published_year", FieldKind::Integer),
    FieldSpec::required("price", FieldKind::Number),
    FieldSpec::optional("stock", FieldKind::Integer),
];

pub static BOOK_SCHEMA: Schema = Schema::new(BOOK_FIELDS);

/// A book in the catalogue.
///
/// `author_id` is expected to name an [`Author`](crate::entities::Author) but
/// is never checked against the author collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author_id: String,
    pub isbn: String,
    pub published_year: i64,
    pub price: f64,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create / full-replacement body
#[derive(Debug, Clone, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author_id: String,
    pub isbn: String,
    pub published_year: i64,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
}

impl FromFields for BookDraft {
    fn from_fields(fields: &Fields) -> Result<Self, ValidationError> {
        BOOK_SCHEMA.validate_full(fields)?;
        BOOK_SCHEMA.extract(fields)
    }
}

/// Partial-update body; every field may be left out
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPatch {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub author_id: Patch<String>,
    #[serde(default)]
    pub isbn: Patch<String>,
    #[serde(default)]
    pub published_year: Patch<i64>,
    #[serde(default)]
    pub price: Patch<f64>,
    #[serde(default)]
    pub stock: Patch<i64>,
}

impl FromFields for BookPatch {
    fn from_fields(fields: &Fields) -> Result<Self, ValidationError> {
        BOOK_SCHEMA.validate_partial(fields)?;
        BOOK_SCHEMA.extract(fields)
    }
}

impl Entity for Book {
    type Draft = BookDraft;

    fn resource_name() -> &'static str {
        "books"
    }

    fn resource_name_singular() -> &'static str {
        "book"
    }

    fn display_name() -> &'static str {
        "Book"
    }

    fn create(id: String, draft: BookDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            author_id: draft.author_id,
            isbn: draft.isbn,
            published_year: draft.published_year,
            price: draft.price,
            stock: draft.stock,
            created_at: now,
            updated_at: now,
        }
    }

    fn replace(&mut self, draft: BookDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.author_id = draft.author_id;
        self.isbn = draft.isbn;
        self.published_year = draft.published_year;
        self.price = draft.price;
        self.stock = draft.stock;
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

impl PartiallyUpdatable for Book {
    type Patch = BookPatch;

    fn apply_patch(&mut self, patch: BookPatch, now: DateTime<Utc>) {
        patch.title.apply_to(&mut self.title);
        patch.author_id.apply_to(&mut self.author_id);
        patch.isbn.apply_to(&mut self.isbn);
        patch.published_year.apply_to(&mut self.published_year);
        patch.price.apply_to(&mut self.price);
        patch.stock.apply_to(&mut self.stock);
        self.updated_at = now;
    }
}
