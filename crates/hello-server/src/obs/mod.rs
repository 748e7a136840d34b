//! Lightweight in-process observability.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler; the
//! process collector adds a few gauges read at scrape time.

pub mod metrics;
pub mod process;

pub use metrics::{AppMetrics, CounterVec, GaugeSample, CONTENT_TYPE};
