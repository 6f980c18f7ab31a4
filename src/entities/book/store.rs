//! Book collection and list filtering

use super::model::Book;
use crate::core::extractors::QueryPairs;
use crate::core::query::{Bounds, non_empty, parse_number};
use crate::core::store::EntityFilter;
use crate::storage::InMemoryDataService;

/// In-memory store for Book entities
pub type BookStore = InMemoryDataService<Book>;

/// Raw query parameters accepted by `GET /books`
///
/// Kept as strings so a malformed number degrades to "no constraint"
/// instead of failing the whole request.
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    pub author_id: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl BookQuery {
    /// Picks the recognised keys; a repeated key keeps its first value
    pub fn from_pairs(query: &QueryPairs) -> Self {
        let take = |key| query.first(key).map(str::to_string);
        Self {
            author_id: take("author_id"),
            min_price: take("min_price"),
            max_price: take("max_price"),
        }
    }

    pub fn into_filter(self) -> BookFilter {
        BookFilter {
            price: Bounds::new(
                parse_number("min_price", self.min_price.as_deref()),
                parse_number("max_price", self.max_price.as_deref()),
            ),
            author_id: non_empty(self.author_id),
        }
    }
}

/// Constraints applied to a book listing. Absent constraints match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    /// Exact match on `author_id`
    pub author_id: Option<String>,
    /// Inclusive bounds on `price`
    pub price: Bounds,
}

impl BookFilter {
    pub fn by_author(author_id: impl Into<String>) -> Self {
        Self {
            author_id: Some(author_id.into()),
            ..Default::default()
        }
    }
}

impl EntityFilter<Book> for BookFilter {
    fn matches(&self, book: &Book) -> bool {
        self.author_id
            .as_deref()
            .is_none_or(|author_id| book.author_id == author_id)
            && self.price.contains(book.price)
    }
}
