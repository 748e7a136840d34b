//! Shared application state for the hello-metrics server.
//!
//! The request counter lives here and reaches handlers through axum's `State`
//! extractor; there is no global registry.

use std::sync::Arc;
use std::time::SystemTime;

use crate::config::ServerConfig;
use crate::obs::{process, AppMetrics, GaugeSample};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<AppMetrics>,
}

struct AppStateInner {
    cfg: ServerConfig,
    started_at: SystemTime,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, started_at: SystemTime::now() }),
            metrics: Arc::new(AppMetrics::new()),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<AppMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Process gauges rendered after the registered families.
    pub fn metrics_extra(&self) -> Vec<GaugeSample> {
        process::collect(self.inner.started_at)
    }
}
