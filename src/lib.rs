//! # BookStore
//!
//! An in-memory REST service managing Books and Authors under `/api/v1`.
//!
//! ## Layout
//!
//! - [`core`]: entity traits, field schemas, validation and the error type
//! - [`storage`]: insertion-ordered in-memory collections and the
//!   [`ResourceStore`](storage::ResourceStore) that owns them
//! - [`entities`]: the Book and Author resources (model, store, handlers, routes)
//! - [`links`]: the author to books lookup
//! - [`server`]: router assembly and serving
//! - [`config`]: YAML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookstore::prelude::*;
//!
//! let store = ResourceStore::with_seed_data()?;
//! ServerBuilder::new()
//!     .with_store(store)
//!     .with_cors(true)
//!     .serve("0.0.0.0:5000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod links;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        entity::{Entity, FromFields, PartiallyUpdatable},
        error::{BookstoreError, BookstoreResult},
        field::Patch,
        service::{DataService, PartialUpdateService},
        store::EntityFilter,
    };

    // === Entities ===
    pub use crate::entities::{Author, Book, BookFilter};
    pub use crate::links::{AuthorBooks, books_by_author};

    // === Storage ===
    pub use crate::storage::{InMemoryDataService, ResourceStore};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};
}
