//! Axum extractors for request bodies, path ids and query strings
//!
//! Each one reports failures as a [`BookstoreError`] so that clients always
//! receive a JSON `{"error": ...}` body instead of axum's plain-text rejections.

use crate::core::error::{BookstoreError, RequestError};
use crate::core::validation::Fields;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde_json::Value;
use std::convert::Infallible;

/// Axum extractor yielding the request body as a JSON object.
///
/// Unlike `Json<T>`, every failure (wrong content type, malformed JSON, a
/// body that is not an object) is rejected with a 400 `{"error": ...}` body.
/// Field-level validation is left to the store.
///
/// ```rust,ignore
/// pub async fn create_book(
///     State(state): State<BookAppState>,
///     JsonFields(fields): JsonFields,
/// ) -> BookstoreResult<(StatusCode, Json<Book>)> {
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFields(pub Fields);

impl<S> FromRequest<S> for JsonFields
where
    S: Send + Sync,
{
    type Rejection = BookstoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = Json::from_request(req, state).await.map_err(|e| {
            BookstoreError::Request(RequestError::InvalidBody {
                message: e.body_text(),
            })
        })?;

        match payload {
            Value::Object(fields) => Ok(JsonFields(fields)),
            other => Err(RequestError::InvalidBody {
                message: format!("expected a JSON object, got {}", json_type(&other)),
            }
            .into()),
        }
    }
}

/// The single `{id}` segment of an item route.
///
/// Segments that do not percent-decode to UTF-8 are rejected with a 400.
#[derive(Debug, Clone)]
pub struct IdPath(pub String);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = BookstoreError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                BookstoreError::Request(RequestError::InvalidPath {
                    message: e.body_text(),
                })
            })?;
        Ok(IdPath(id))
    }
}

/// Query-string pairs in the order they were sent, duplicates included.
///
/// Never rejects: a query string that cannot be decoded is treated as empty.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl QueryPairs {
    /// First value sent for `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => Ok(QueryPairs(pairs)),
            Err(e) => {
                tracing::debug!(error = %e.body_text(), "ignoring undecodable query string");
                Ok(QueryPairs::default())
            }
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
