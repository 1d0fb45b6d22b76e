//! HTTP server runner with graceful shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tally_config::ServerSettings;
use tally_db::store::IssueStore;
use tokio::net::TcpListener;

use crate::error::ServerError;
use crate::router::app;

/// The HTTP server.
pub struct Server<S> {
    addr: SocketAddr,
    cors: bool,
    store: Arc<S>,
}

impl<S: IssueStore> Server<S> {
    /// Creates a server over `store` listening where `settings` says.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` if the host is not an IP literal.
    pub fn new(settings: &ServerSettings, store: S) -> Result<Self, ServerError> {
        Ok(Self {
            addr: settings.socket_addr()?,
            cors: settings.cors,
            store: Arc::new(store),
        })
    }

    /// Creates the router.
    fn router(&self) -> Router {
        app(Arc::clone(&self.store), self.cors)
    }

    /// Binds the configured address and serves until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound or serving fails.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = TcpListener::bind(self.addr).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serves on an already-bound listener until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if serving fails.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        let local = listener.local_addr()?;
        tracing::info!(addr = %local, "Starting Tally server");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down gracefully"),
    }
}
