use std::sync::Arc;

use clap::Parser;
use link_server::LinkServer;
use link_store::InMemoryStore;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = cli.server_config()?;

    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    tracing::debug!(?config, "resolved configuration");

    let store: Arc<InMemoryStore> = Arc::new(InMemoryStore::new());
    LinkServer::new(config, store).serve().await?;
    Ok(())
}
