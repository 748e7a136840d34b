//! Listener lifecycle: bind, serve, drain on ctrl-c.

use std::net::SocketAddr;

use hello_core::error::{HelloError, Result};
use tokio::net::TcpListener;

use crate::{app_state::AppState, router};

/// Bind `listen` and serve until ctrl-c.
pub async fn run(state: AppState) -> Result<()> {
    let listen = state.cfg().server.listen_addr()?;
    let listener = bind(listen).await?;
    serve(listener, state).await
}

pub async fn bind(listen: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(listen)
        .await
        .map_err(|e| HelloError::Internal(format!("failed to bind {listen}: {e}")))
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = router::build_router(state);
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "hello-metrics listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HelloError::Internal(format!("server failed: {e}")))?;

    tracing::info!("hello-metrics stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
