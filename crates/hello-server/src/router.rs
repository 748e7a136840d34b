//! Axum router wiring.
//!
//! Route table:
//! - `GET /`        -> `api::greeting`
//! - `GET /metrics` -> `ops::metrics`
//!
//! Anything else falls through to axum's default 404 (405 for a known path
//! with an unrouted method).

use axum::{routing::get, Router};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::greeting))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
