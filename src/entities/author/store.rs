//! Author collection

use super::model::Author;
use crate::storage::InMemoryDataService;

/// In-memory store for Author entities
pub type AuthorStore = InMemoryDataService<Author>;
