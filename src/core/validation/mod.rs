//! Payload validation
//!
//! Each entity type declares a [`Schema`] of its writable fields. Handlers and
//! stores run payloads through the schema before building or mutating entities,
//! so a rejected write never touches a collection.

pub mod schema;
pub mod validators;

pub use schema::{FieldKind, FieldSpec, Fields, Schema};
