//! Relationships between entities
//!
//! Books reference their author through `author_id`. The link is not
//! enforced: a book may point at an author that does not exist, and
//! deleting an author leaves its books in place.

pub mod handlers;
pub mod service;

pub use handlers::{author_books_routes, list_author_books};
pub use service::{AuthorBooks, books_by_author};
