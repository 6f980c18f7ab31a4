//! Core traits and types shared by every resource

pub mod entity;
pub mod error;
pub mod extractors;
pub mod field;
pub mod query;
pub mod service;
pub mod store;
pub mod validation;

pub use entity::{Entity, FromFields, PartiallyUpdatable};
pub use error::{BookstoreError, BookstoreResult};
pub use extractors::{IdPath, JsonFields, QueryPairs};
pub use field::Patch;
pub use service::{DataService, PartialUpdateService};
pub use store::EntityFilter;
pub use validation::{Fields, Schema};
