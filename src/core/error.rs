//! Typed error handling for the bookstore service
//!
//! Every fallible store or handler operation returns a [`BookstoreResult`].
//! The error hierarchy mirrors the HTTP contract:
//!
//! - [`EntityError`]: the referenced entity does not exist (404)
//! - [`ValidationError`]: a write carried missing or malformed fields (400)
//! - [`RequestError`]: the request body or path could not be decoded (400)
//! - [`ConfigError`]: configuration could not be loaded (startup only)
//!
//! Rendering an error as an HTTP response always yields `{"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the bookstore service
#[derive(Debug, Error)]
pub enum BookstoreError {
    /// Entity lookups that came back empty
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Field validation failures on writes
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Undecodable requests
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal errors (poisoned locks and the like)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl BookstoreError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookstoreError::Entity(e) => e.status_code(),
            BookstoreError::Validation(_) => StatusCode::BAD_REQUEST,
            BookstoreError::Request(_) => StatusCode::BAD_REQUEST,
            BookstoreError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookstoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code, used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            BookstoreError::Entity(e) => e.error_code(),
            BookstoreError::Validation(_) => "VALIDATION_ERROR",
            BookstoreError::Request(_) => "INVALID_REQUEST",
            BookstoreError::Config(_) => "CONFIG_ERROR",
            BookstoreError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for BookstoreError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(code = self.error_code(), error = %self, "request failed");
        } else {
            let fields = match &self {
                BookstoreError::Validation(e) => e.fields().join(","),
                _ => String::new(),
            };
            tracing::debug!(code = self.error_code(), fields = %fields, error = %self, "request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity lookups
#[derive(Debug, Error)]
pub enum EntityError {
    /// No entity with the requested id exists in its collection.
    ///
    /// `entity_type` is the display name ("Book", "Author").
    #[error("{entity_type} not found")]
    NotFound { entity_type: &'static str, id: String },
}

impl EntityError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        EntityError::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One or more required fields were absent or null
    #[error("{}", missing_message(.0))]
    MissingFields(Vec<String>),

    /// A field was present with the wrong JSON type
    #[error("Field '{field}' must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    /// A non-nullable field was explicitly set to null
    #[error("Field '{field}' cannot be null")]
    NullField { field: String },

    /// Any other field-level problem
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

fn missing_message(fields: &[String]) -> String {
    match fields {
        [single] => format!("Missing required field: {}", single),
        many => format!("Missing required fields: {}", many.join(", ")),
    }
}

impl ValidationError {
    /// Names of the fields this error refers to
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::MissingFields(fields) => fields.iter().map(String::as_str).collect(),
            ValidationError::InvalidType { field, .. }
            | ValidationError::NullField { field }
            | ValidationError::InvalidValue { field, .. } => vec![field.as_str()],
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP request decoding
#[derive(Debug, Error)]
pub enum RequestError {
    /// The body was not a JSON object
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// A path segment could not be decoded
    #[error("Invalid path parameter: {message}")]
    InvalidPath { message: String },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration document
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// An environment override carried an unusable value
    #[error("Invalid value '{value}' for {key}: {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    #[error("IO error reading '{path}': {message}")]
    IoError { path: String, message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for bookstore operations
pub type BookstoreResult<T> = Result<T, BookstoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_resource() {
        let err = EntityError::not_found("Book", "abc");
        assert_eq!(err.to_string(), "Book not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_single_missing_field_message() {
        let err = ValidationError::MissingFields(vec!["isbn".to_string()]);
        assert_eq!(err.to_string(), "Missing required field: isbn");
    }

    #[test]
    fn test_multiple_missing_fields_message() {
        let err = ValidationError::MissingFields(vec!["isbn".to_string(), "price".to_string()]);
        assert_eq!(err.to_string(), "Missing required fields: isbn, price");
        assert_eq!(err.fields(), vec!["isbn", "price"]);
    }

    #[test]
    fn test_status_codes() {
        let not_found: BookstoreError = EntityError::not_found("Author", "1").into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.error_code(), "ENTITY_NOT_FOUND");

        let invalid: BookstoreError = ValidationError::NullField {
            field: "title".to_string(),
        }
        .into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let body: BookstoreError = RequestError::InvalidBody {
            message: "expected object".to_string(),
        }
        .into();
        assert_eq!(body.status_code(), StatusCode::BAD_REQUEST);

        let internal = BookstoreError::Internal("lock poisoned".to_string());
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_body() {
        let err: BookstoreError = EntityError::not_found("Book", "x").into();
        assert_eq!(err.to_response().error, "Book not found");
    }

    #[test]
    fn test_invalid_path_message() {
        let err: BookstoreError = RequestError::InvalidPath {
            message: "Invalid URL: Invalid UTF-8 in `id`".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_REQUEST");
        assert!(err.to_string().starts_with("Invalid path parameter: "));
    }

    #[test]
    fn test_config_parse_error_mentions_file() {
        let err = ConfigError::ParseError {
            file: Some("bookstore.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert!(err.to_string().contains("bookstore.yaml"));
        assert!(err.to_string().contains("bad indent"));
    }
}
