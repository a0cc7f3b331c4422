use crate::routes::{AppState, app_router};
use crate::Result;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// HTTP server exposing the automation routes
pub struct ApiServer {
    addr: SocketAddr,
    state: AppState,
}

impl ApiServer {
    pub fn new(addr: SocketAddr, state: AppState) -> Self {
        Self { addr, state }
    }

    /// Serve until Ctrl+C
    pub async fn start(self) -> Result<()> {
        tracing::info!("Starting API server on {}", self.addr);

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("✓ Listening on http://{}", local_addr);
        tracing::info!("Endpoints:");
        tracing::info!("  GET  /                          health check");
        tracing::info!("  POST /api/brighton-automation   run supplier automation");
        tracing::info!("  GET  /api/test                  test payload");
        tracing::info!("  POST /api/test                  run automation on test payload");

        axum::serve(listener, app_router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("✅ API server stopped gracefully");
        Ok(())
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down..."),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
