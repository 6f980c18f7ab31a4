//! Author to books lookup

use crate::core::error::BookstoreResult;
use crate::core::service::DataService;
use crate::core::store::EntityFilter;
use crate::entities::{Author, Book, BookFilter};
use crate::storage::ResourceStore;
use serde::Serialize;

/// An author together with every book that references it
#[derive(Debug, Clone, Serialize)]
pub struct AuthorBooks {
    pub author: Author,
    pub books: Vec<Book>,
    pub count: usize,
}

/// Resolve `author_id` and collect its books in catalogue order.
///
/// Fails with "Author not found" when the author does not exist, even if
/// books still reference the id.
pub async fn books_by_author(
    store: &ResourceStore,
    author_id: &str,
) -> BookstoreResult<AuthorBooks> {
    let author = store.authors.get(author_id).await?;
    let books = BookFilter::by_author(author_id).apply(store.books.list().await?);

    Ok(AuthorBooks {
        count: books.len(),
        author,
        books,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{BookstoreError, EntityError};
    use serde_json::json;

    #[tokio::test]
    async fn test_books_by_seeded_author() {
        let store = ResourceStore::with_seed_data().unwrap();
        let result = books_by_author(&store, "3").await.unwrap();

        assert_eq!(result.author.name, "George Orwell");
        assert_eq!(result.count, 1);
        assert_eq!(result.books[0].title, "1984");
    }

    #[tokio::test]
    async fn test_author_without_books() {
        let store = ResourceStore::with_seed_data().unwrap();
        store.books.delete("2").await.unwrap();

        let result = books_by_author(&store, "2").await.unwrap();
        assert_eq!(result.author.name, "Harper Lee");
        assert!(result.books.is_empty());
        assert_eq!(result.count, 0);
    }

    #[tokio::test]
    async fn test_missing_author_is_not_found() {
        let store = ResourceStore::with_seed_data().unwrap();
        store.authors.delete("1").await.unwrap();

        // Book "1" still references author "1"
        let err = books_by_author(&store, "1").await.unwrap_err();
        assert!(matches!(
            err,
            BookstoreError::Entity(EntityError::NotFound { .. })
        ));
        assert_eq!(err.to_string(), "Author not found");
    }

    #[tokio::test]
    async fn test_serialized_shape() {
        let store = ResourceStore::with_seed_data().unwrap();
        let result = books_by_author(&store, "1").await.unwrap();
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["author"]["id"], json!("1"));
        assert_eq!(value["books"][0]["author_id"], json!("1"));
        assert_eq!(value["count"], json!(1));
    }
}
