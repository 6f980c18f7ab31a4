//! Service traits for entity operations

use crate::core::entity::{Entity, PartiallyUpdatable};
use crate::core::error::BookstoreResult;
use crate::core::validation::Fields;
use async_trait::async_trait;

/// Service trait for managing one collection of entities
///
/// Implementations own the collection and are its only mutator. Write
/// operations take the raw field map and validate it against the entity's
/// schema, so a rejected payload never changes the collection.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Validate `fields`, assign a new id and timestamps, store and return the entity
    async fn create(&self, fields: &Fields) -> BookstoreResult<T>;

    /// Get an entity by id, or `NotFound`
    async fn get(&self, id: &str) -> BookstoreResult<T>;

    /// List all entities in insertion order
    async fn list(&self) -> BookstoreResult<Vec<T>>;

    /// Full replacement: every required field must be supplied
    async fn replace(&self, id: &str, fields: &Fields) -> BookstoreResult<T>;

    /// Remove an entity, or `NotFound`
    async fn delete(&self, id: &str) -> BookstoreResult<()>;
}

/// Partial updates for entity types that support them
#[async_trait]
pub trait PartialUpdateService<T: PartiallyUpdatable>: DataService<T> {
    /// Overwrite only the supplied fields (any subset, including none)
    async fn patch(&self, id: &str, fields: &Fields) -> BookstoreResult<T>;
}
