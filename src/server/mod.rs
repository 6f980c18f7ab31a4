//! HTTP server assembly
//!
//! `ServerBuilder` wires the entity routes, the author/books relationship
//! route and the service routes (health, welcome) into one axum router.

pub mod builder;
pub mod entity_registry;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use router::API_BASE_PATH;
