//! In-memory implementation of DataService

use crate::core::entity::{Entity, FromFields, PartiallyUpdatable, new_id};
use crate::core::error::{BookstoreError, BookstoreResult, EntityError};
use crate::core::service::{DataService, PartialUpdateService};
use crate::core::validation::Fields;
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory collection of one entity type
///
/// Entities are kept in insertion order. A single `RwLock` guards the whole
/// collection, so each operation is atomic with respect to its own entity.
/// Clones share the same underlying collection.
#[derive(Clone)]
pub struct InMemoryDataService<T: Entity> {
    data: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Entity> InMemoryDataService<T> {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Insert a fully-formed entity as-is, keeping its id and timestamps.
    ///
    /// Used for seed data; regular writes go through [`DataService::create`].
    pub fn insert(&self, entity: T) -> BookstoreResult<()> {
        self.write()?.insert(entity.id().to_string(), entity);
        Ok(())
    }

    /// Number of stored entities
    pub fn len(&self) -> BookstoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> BookstoreResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> BookstoreResult<RwLockReadGuard<'_, IndexMap<String, T>>> {
        self.data.read().map_err(|e| {
            BookstoreError::Internal(format!(
                "Failed to acquire read lock on {}: {}",
                T::resource_name(),
                e
            ))
        })
    }

    fn write(&self) -> BookstoreResult<RwLockWriteGuard<'_, IndexMap<String, T>>> {
        self.data.write().map_err(|e| {
            BookstoreError::Internal(format!(
                "Failed to acquire write lock on {}: {}",
                T::resource_name(),
                e
            ))
        })
    }

    fn not_found(id: &str) -> BookstoreError {
        EntityError::not_found(T::display_name(), id).into()
    }
}

impl<T: Entity> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, fields: &Fields) -> BookstoreResult<T> {
        let draft = T::Draft::from_fields(fields)?;
        let entity = T::create(new_id(), draft, Utc::now());

        self.write()?
            .insert(entity.id().to_string(), entity.clone());

        tracing::debug!(entity = T::resource_name_singular(), id = entity.id(), "created");
        Ok(entity)
    }

    async fn get(&self, id: &str) -> BookstoreResult<T> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn list(&self) -> BookstoreResult<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn replace(&self, id: &str, fields: &Fields) -> BookstoreResult<T> {
        let mut data = self.write()?;
        let entity = data.get_mut(id).ok_or_else(|| Self::not_found(id))?;

        let draft = T::Draft::from_fields(fields)?;
        entity.replace(draft, Utc::now());

        tracing::debug!(entity = T::resource_name_singular(), id, "replaced");
        Ok(entity.clone())
    }

    async fn delete(&self, id: &str) -> BookstoreResult<()> {
        self.write()?
            .shift_remove(id)
            .ok_or_else(|| Self::not_found(id))?;

        tracing::debug!(entity = T::resource_name_singular(), id, "deleted");
        Ok(())
    }
}

#[async_trait]
impl<T: PartiallyUpdatable> PartialUpdateService<T> for InMemoryDataService<T> {
    async fn patch(&self, id: &str, fields: &Fields) -> BookstoreResult<T> {
        let mut data = self.write()?;
        let entity = data.get_mut(id).ok_or_else(|| Self::not_found(id))?;

        let patch = T::Patch::from_fields(fields)?;
        entity.apply_patch(patch, Utc::now());

        tracing::debug!(entity = T::resource_name_singular(), id, "patched");
        Ok(entity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Author, Book};
    use serde_json::{Value, json};

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    fn orwell() -> Fields {
        fields(json!({
            "name": "George Orwell",
            "birth_year": 1903,
            "nationality": "British"
        }))
    }

    fn nineteen_eighty_four(author_id: &str) -> Fields {
        fields(json!({
            "title": "1984",
            "author_id": author_id,
            "isbn": "978-0-452-28423-4",
            "published_year": 1949,
            "price": 12.50
        }))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = InMemoryDataService::<Author>::new();

        let created = service.create(&orwell()).await.unwrap();
        assert_eq!(created.name, "George Orwell");
        assert_eq!(created.created_at, created.updated_at);

        let fetched = service.get(&created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let service = InMemoryDataService::<Author>::new();
        let a = service.create(&orwell()).await.unwrap();
        let b = service.create(&orwell()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(service.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields_without_storing() {
        let service = InMemoryDataService::<Book>::new();
        let mut payload = nineteen_eighty_four("a1");
        payload.remove("isbn");

        let err = service.create(&payload).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: isbn");
        assert!(service.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let service = InMemoryDataService::<Book>::new();
        for title in ["A", "B", "C", "D"] {
            let mut payload = nineteen_eighty_four("a1");
            payload.insert("title".to_string(), json!(title));
            service.create(&payload).await.unwrap();
        }

        let listed = service.list().await.unwrap();
        let titles: Vec<_> = listed.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C", "D"]);
    }

    #[tokio::test]
    async fn test_delete_keeps_remaining_order() {
        let service = InMemoryDataService::<Book>::new();
        let mut ids = Vec::new();
        for title in ["A", "B", "C"] {
            let mut payload = nineteen_eighty_four("a1");
            payload.insert("title".to_string(), json!(title));
            ids.push(service.create(&payload).await.unwrap().id);
        }

        service.delete(&ids[0]).await.unwrap();

        let titles: Vec<_> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["B", "C"]);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let service = InMemoryDataService::<Author>::new();
        let created = service.create(&orwell()).await.unwrap();

        service.delete(&created.id).await.unwrap();
        let err = service.delete(&created.id).await.unwrap_err();
        assert!(matches!(err, BookstoreError::Entity(EntityError::NotFound { .. })));
        assert_eq!(err.to_string(), "Author not found");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let service = InMemoryDataService::<Book>::new();
        let err = service.get("nope").await.unwrap_err();
        assert_eq!(err.to_string(), "Book not found");
    }

    #[tokio::test]
    async fn test_replace_checks_existence_before_body() {
        let service = InMemoryDataService::<Author>::new();
        let err = service.replace("nope", &Fields::new()).await.unwrap_err();
        assert!(matches!(err, BookstoreError::Entity(_)));
    }

    #[tokio::test]
    async fn test_replace_rejects_missing_fields_and_keeps_entity() {
        let service = InMemoryDataService::<Author>::new();
        let created = service.create(&orwell()).await.unwrap();

        let err = service
            .replace(&created.id, &fields(json!({ "name": "Eric Blair" })))
            .await
            .unwrap_err();
        assert!(matches!(err, BookstoreError::Validation(_)));

        let unchanged = service.get(&created.id).await.unwrap();
        assert_eq!(unchanged.name, "George Orwell");
        assert_eq!(unchanged.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_patch_unknown_id_is_not_found() {
        let service = InMemoryDataService::<Book>::new();
        let err = service
            .patch("nope", &fields(json!({ "price": 1.0 })))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Book not found");
    }

    #[tokio::test]
    async fn test_insert_keeps_given_id_and_timestamps() {
        let service = InMemoryDataService::<Author>::new();
        let created = service.create(&orwell()).await.unwrap();

        let other = InMemoryDataService::<Author>::new();
        other.insert(created.clone()).unwrap();

        let copy = other.get(&created.id).await.unwrap();
        assert_eq!(copy.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_clones_share_the_collection() {
        let service = InMemoryDataService::<Author>::new();
        let handle = service.clone();
        service.create(&orwell()).await.unwrap();
        assert_eq!(handle.len().unwrap(), 1);
    }
}
