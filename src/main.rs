use anyhow::Context;
use bookstore::config::ServerConfig;
use bookstore::server::ServerBuilder;
use bookstore::storage::ResourceStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = if config.seed_data {
        ResourceStore::with_seed_data()?
    } else {
        ResourceStore::new()
    };

    tracing::info!(
        seed_data = config.seed_data,
        cors = config.cors,
        "starting BookStore API v{}",
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::new()
        .with_store(store)
        .with_cors(config.cors)
        .serve(&config.socket_addr())
        .await
}
