use std::sync::Arc;

use listd::{Assets, Config, ItemStore, Server, app};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), listd::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let store = Arc::new(if config.seed { ItemStore::seeded() } else { ItemStore::new() });
    let assets = Arc::new(Assets::new(&config.asset_dir));

    info!(assets = %config.asset_dir.display(), items = store.len(), "starting");

    Server::bind(config.addr)
        .serve(app::routes(store, assets))
        .await
}
