//! hello-metrics server
//!
//! - `GET /`        : JSON greeting, counted per (method, endpoint)
//! - `GET /metrics` : Prometheus text exposition

use tracing_subscriber::{fmt, EnvFilter};

use hello_core::error::Result;
use hello_server::{app_state, config, server};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let path = config::config_path();
    let cfg = config::load_or_default(&path)?;
    tracing::info!(listen = %cfg.server.listen, "hello-metrics starting");

    let state = app_state::AppState::new(cfg);
    server::run(state).await
}
