//! Service-level routes that do not belong to any entity

use axum::{Json, Router, routing::get};
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};

/// Base path every resource route is nested under
pub const API_BASE_PATH: &str = "/api/v1";

/// Health check routes, mounted under the base path
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Welcome route, mounted at the server root
pub fn root_routes() -> Router {
    Router::new().route("/", get(root))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
    }))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the BookStore API",
        "version": env!("CARGO_PKG_VERSION"),
        "api": API_BASE_PATH
    }))
}
