//! Aggregated store for all entities
//!
//! The `ResourceStore` owns the Book and Author collections. Build one at
//! process start and hand clones to the server; clones share the same data.
//! Tests get isolation by building a fresh store each.

use crate::core::error::{BookstoreError, BookstoreResult};
use crate::entities::{Author, AuthorStore, Book, BookStore};
use chrono::{DateTime, TimeZone, Utc};

/// Aggregated store containing all entity collections
#[derive(Clone, Default)]
pub struct ResourceStore {
    pub books: BookStore,
    pub authors: AuthorStore,
}

impl ResourceStore {
    /// Empty collections
    pub fn new() -> Self {
        Self {
            books: BookStore::new(),
            authors: AuthorStore::new(),
        }
    }

    /// Collections pre-populated with the demo catalogue
    pub fn with_seed_data() -> BookstoreResult<Self> {
        let store = Self::new();
        store.seed()?;
        Ok(store)
    }

    /// Insert the demo catalogue: three authors and one book by each.
    ///
    /// Seed entities use the ids "1", "2", "3"; book N is by author N.
    pub fn seed(&self) -> BookstoreResult<()> {
        let at = seed_timestamp()?;

        let authors = [
            ("1", "F. Scott Fitzgerald", 1896, "American"),
            ("2", "Harper Lee", 1926, "American"),
            ("3", "George Orwell", 1903, "British"),
        ];
        for (id, name, birth_year, nationality) in authors {
            self.authors.insert(Author {
                id: id.to_string(),
                name: name.to_string(),
                birth_year,
                nationality: nationality.to_string(),
                created_at: at,
                updated_at: at,
            })?;
        }

        let books = [
            ("1", "The Great Gatsby", "978-0-7432-7356-5", 1925, 12.99, 42),
            ("2", "To Kill a Mockingbird", "978-0-06-112008-4", 1960, 14.99, 28),
            ("3", "1984", "978-0-452-28423-4", 1949, 13.99, 35),
        ];
        for (id, title, isbn, published_year, price, stock) in books {
            self.books.insert(Book {
                id: id.to_string(),
                title: title.to_string(),
                author_id: id.to_string(),
                isbn: isbn.to_string(),
                published_year,
                price,
                stock,
                created_at: at,
                updated_at: at,
            })?;
        }

        tracing::debug!(
            authors = authors.len(),
            books = books.len(),
            "seeded resource store"
        );
        Ok(())
    }
}

fn seed_timestamp() -> BookstoreResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| BookstoreError::Internal("invalid seed timestamp".to_string()))
}
