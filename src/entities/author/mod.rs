//! Author entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod store;

pub use descriptor::AuthorDescriptor;
pub use handlers::*;
pub use model::{AUTHOR_SCHEMA, Author, AuthorDraft};
pub use store::AuthorStore;
