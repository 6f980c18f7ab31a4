//! Book HTTP handlers

use super::{
    model::Book,
    store::{BookQuery, BookStore},
};
use crate::core::error::BookstoreResult;
use crate::core::extractors::{IdPath, JsonFields, QueryPairs};
use crate::core::service::{DataService, PartialUpdateService};
use crate::core::store::EntityFilter;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{Value, json};

/// Book-specific AppState
#[derive(Clone)]
pub struct BookAppState {
    pub store: BookStore,
}

pub async fn list_books(
    State(state): State<BookAppState>,
    query: QueryPairs,
) -> BookstoreResult<Json<Value>> {
    let filter = BookQuery::from_pairs(&query).into_filter();
    let books = filter.apply(state.store.list().await?);
    Ok(Json(json!({
        "books": books,
        "count": books.len()
    })))
}

pub async fn get_book(
    State(state): State<BookAppState>,
    IdPath(id): IdPath,
) -> BookstoreResult<Json<Book>> {
    state.store.get(&id).await.map(Json)
}

pub async fn create_book(
    State(state): State<BookAppState>,
    JsonFields(fields): JsonFields,
) -> BookstoreResult<(StatusCode, Json<Book>)> {
    let book = state.store.create(&fields).await?;
    tracing::info!(id = %book.id, title = %book.title, "book created");
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn replace_book(
    State(state): State<BookAppState>,
    IdPath(id): IdPath,
    JsonFields(fields): JsonFields,
) -> BookstoreResult<Json<Book>> {
    state.store.replace(&id, &fields).await.map(Json)
}

pub async fn patch_book(
    State(state): State<BookAppState>,
    IdPath(id): IdPath,
    JsonFields(fields): JsonFields,
) -> BookstoreResult<Json<Book>> {
    state.store.patch(&id, &fields).await.map(Json)
}

pub async fn delete_book(
    State(state): State<BookAppState>,
    IdPath(id): IdPath,
) -> BookstoreResult<StatusCode> {
    state.store.delete(&id).await?;
    tracing::info!(%id, "book deleted");
    Ok(StatusCode::NO_CONTENT)
}
