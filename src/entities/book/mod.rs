//! Book entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::BookDescriptor;
pub use handlers::*;
pub use model::{BOOK_SCHEMA, Book, BookDraft, BookPatch};
pub use store::{BookFilter, BookQuery, BookStore};
