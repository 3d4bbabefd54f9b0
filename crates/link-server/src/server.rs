use std::sync::Arc;

use link_store::InMemoryStore;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Identbase link service.
///
/// Owns a handle to the store it was given; it never creates one itself.
pub struct LinkServer {
    config: ServerConfig,
    state: AppState,
}

impl LinkServer {
    pub fn new(config: ServerConfig, store: Arc<InMemoryStore>) -> Self {
        Self {
            config,
            state: AppState::new(store),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<InMemoryStore> {
        &self.state.store
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        build_router(self.state.clone(), &self.config)
    }

    /// Start serving requests until Ctrl-C is received.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Launching identbase service on {addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down identbase service");
}
