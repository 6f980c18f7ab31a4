//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::router::{API_BASE_PATH, health_routes, root_routes};
use crate::entities::{AuthorDescriptor, BookDescriptor};
use crate::links::author_books_routes;
use crate::storage::ResourceStore;
use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for the BookStore HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(ResourceStore::with_seed_data()?)
///     .with_cors(true)
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<ResourceStore>,
    custom_routes: Vec<Router>,
    cors: bool,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            custom_routes: Vec::new(),
            cors: false,
        }
    }

    /// Set the resource store (required)
    pub fn with_store(mut self, store: ResourceStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Add custom routes under the API base path
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Allow cross-origin requests from any origin
    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.cors = enabled;
        self
    }

    /// Build the final router
    ///
    /// Entity, relationship and health routes live under `/api/v1`; the
    /// welcome route is served at `/`.
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("ResourceStore is required. Call .with_store()"))?;

        let registry = resource_registry(&store)?;
        tracing::debug!(resources = ?registry.entity_types(), "building routes");

        let mut api = health_routes()
            .merge(registry.build_routes())
            .merge(author_books_routes(store));

        for custom_router in self.custom_routes {
            api = api.merge(custom_router);
        }

        let mut app = root_routes()
            .nest(API_BASE_PATH, api)
            .layer(TraceLayer::new_for_http());

        if self.cors {
            app = app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        Ok(app)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Book and Author collections backed by `store`
fn resource_registry(store: &ResourceStore) -> Result<EntityRegistry> {
    let mut registry = EntityRegistry::new();
    registry.register(Box::new(BookDescriptor::new(store.books.clone())))?;
    registry.register(Box::new(AuthorDescriptor::new(store.authors.clone())))?;
    Ok(registry)
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
