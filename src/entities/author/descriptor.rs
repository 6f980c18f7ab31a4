//! Entity descriptor for Author

use super::{
    create_author, delete_author, get_author, handlers::AuthorAppState, list_authors,
    replace_author, store::AuthorStore,
};
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Author entity
pub struct AuthorDescriptor {
    pub store: AuthorStore,
}

impl AuthorDescriptor {
    pub fn new(store: AuthorStore) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for AuthorDescriptor {
    fn entity_type(&self) -> &str {
        "author"
    }

    fn plural(&self) -> &str {
        "authors"
    }

    /// No PATCH route: authors only support full replacement.
    fn build_routes(&self) -> Router {
        let state = AuthorAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route("/authors", get(list_authors).post(create_author))
            .route(
                "/authors/{id}",
                get(get_author).put(replace_author).delete(delete_author),
            )
            .with_state(state)
    }
}
