//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use axum::Router;
use signup_registry::{ActivityRegistry, InMemoryActivityRegistry};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Signup Daemon Server
pub struct Server {
    config: DaemonConfig,
    registry: Arc<InMemoryActivityRegistry>,
}

impl Server {
    /// Create a new server, seeding the registry from the configured catalog
    pub fn new(config: DaemonConfig) -> DaemonResult<Self> {
        let seed = config.catalog.load_seed()?;
        let registry = Arc::new(InMemoryActivityRegistry::from_seed(&seed)?);

        Ok(Self { config, registry })
    }

    /// Build the router without binding a socket
    pub fn router(&self) -> Router {
        let registry: Arc<dyn ActivityRegistry> = self.registry.clone();
        let state = AppState::new(registry, self.config.static_files.index_url())
            .with_request_timeout(self.config.server.request_timeout());
        create_router(state, &self.config)
    }

    /// Run the server
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;
        let app = self.router();

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Signup daemon listening on {}", listener.local_addr()?);
        tracing::info!(
            activities = self.registry.activity_count().await,
            static_dir = %self.config.static_files.dir.display(),
            "Activity registry ready"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("Signup daemon shutting down");

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
