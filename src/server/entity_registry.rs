//! Registry of the resources mounted under the API base path

use anyhow::{Result, bail};
use axum::Router;

/// A resource collection that can mount its own CRUD routes
///
/// Routes are relative to the API base path and live under
/// `/{plural}` and `/{plural}/{id}`.
pub trait EntityDescriptor: Send + Sync {
    /// Singular resource name, e.g. "book"
    fn entity_type(&self) -> &str;

    /// Collection path segment, e.g. "books"
    fn plural(&self) -> &str;

    fn build_routes(&self) -> Router;
}

/// Resources in registration order
///
/// Two resources may not share a name or a collection segment, since
/// axum panics when merging overlapping routes.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, failing if its name or segment is already taken
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) -> Result<()> {
        for existing in &self.descriptors {
            if existing.entity_type() == descriptor.entity_type() {
                bail!("resource '{}' is already registered", descriptor.entity_type());
            }
            if existing.plural() == descriptor.plural() {
                bail!(
                    "path '/{}' is already served by '{}'",
                    descriptor.plural(),
                    existing.entity_type()
                );
            }
        }
        self.descriptors.push(descriptor);
        Ok(())
    }

    pub fn build_routes(&self) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, descriptor| {
                tracing::debug!(
                    resource = descriptor.entity_type(),
                    segment = descriptor.plural(),
                    "mounting resource routes"
                );
                router.merge(descriptor.build_routes())
            })
    }

    /// Resource names in registration order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.entity_type()).collect()
    }
}
