//! Storage implementations

pub mod in_memory;
pub mod resource_store;

pub use in_memory::InMemoryDataService;
pub use resource_store::ResourceStore;
