//! Concrete entity types exposed by the service

pub mod author;
pub mod book;

pub use author::{Author, AuthorDescriptor, AuthorStore};
pub use book::{Book, BookDescriptor, BookFilter, BookStore};
