//! Entity descriptor for Book

use super::{
    create_book, delete_book, get_book, handlers::BookAppState, list_books, patch_book,
    replace_book, store::BookStore,
};
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Book entity
pub struct BookDescriptor {
    pub store: BookStore,
}

impl BookDescriptor {
    pub fn new(store: BookStore) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for BookDescriptor {
    fn entity_type(&self) -> &str {
        "book"
    }

    fn plural(&self) -> &str {
        "books"
    }

    fn build_routes(&self) -> Router {
        let state = BookAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/books", get(list_books).post(create_book))
            .route(
                "/books/{id}",
                get(get_book)
                    .put(replace_book)
                    .patch(patch_book)
                    .delete(delete_book),
            )
            .with_state(state)
    }
}
