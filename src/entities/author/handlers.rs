//! Author HTTP handlers

use super::{model::Author, store::AuthorStore};
use crate::core::error::BookstoreResult;
use crate::core::extractors::{IdPath, JsonFields};
use crate::core::service::DataService;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::{Value, json};

/// Author-specific AppState
#[derive(Clone)]
pub struct AuthorAppState {
    pub store: AuthorStore,
}

pub async fn list_authors(State(state): State<AuthorAppState>) -> BookstoreResult<Json<Value>> {
    let authors = state.store.list().await?;
    Ok(Json(json!({
        "authors": authors,
        "count": authors.len()
    })))
}

pub async fn get_author(
    State(state): State<AuthorAppState>,
    IdPath(id): IdPath,
) -> BookstoreResult<Json<Author>> {
    state.store.get(&id).await.map(Json)
}

pub async fn create_author(
    State(state): State<AuthorAppState>,
    JsonFields(fields): JsonFields,
) -> BookstoreResult<(StatusCode, Json<Author>)> {
    let author = state.store.create(&fields).await?;
    tracing::info!(id = %author.id, name = %author.name, "author created");
    Ok((StatusCode::CREATED, Json(author)))
}

pub async fn replace_author(
    State(state): State<AuthorAppState>,
    IdPath(id): IdPath,
    JsonFields(fields): JsonFields,
) -> BookstoreResult<Json<Author>> {
    state.store.replace(&id, &fields).await.map(Json)
}

/// Books referencing the author are left in place.
pub async fn delete_author(
    State(state): State<AuthorAppState>,
    IdPath(id): IdPath,
) -> BookstoreResult<StatusCode> {
    state.store.delete(&id).await?;
    tracing::info!(%id, "author deleted");
    Ok(StatusCode::NO_CONTENT)
}
