//! HTTP handlers for entity relationships

use super::service::{AuthorBooks, books_by_author};
use crate::core::error::BookstoreResult;
use crate::core::extractors::IdPath;
use crate::storage::ResourceStore;
use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

/// List an author together with its books
///
/// `GET /authors/{id}/books`
pub async fn list_author_books(
    State(store): State<ResourceStore>,
    IdPath(author_id): IdPath,
) -> BookstoreResult<Json<AuthorBooks>> {
    books_by_author(&store, &author_id).await.map(Json)
}

/// Routes spanning more than one collection
pub fn author_books_routes(store: ResourceStore) -> Router {
    Router::new()
        .route("/authors/{id}/books", get(list_author_books))
        .with_state(store)
}
