//! Application HTTP endpoints.
//!
//! - `/` : greeting (counts every invocation)

use axum::{extract::State, Json};

use hello_core::protocol::Greeting;

use crate::app_state::AppState;

/// Label set recorded for every greeting, regardless of the request's method.
pub const GREETING_LABELS: [(&str, &str); 2] = [("method", "GET"), ("endpoint", "/")];

pub async fn greeting(State(state): State<AppState>) -> Json<Greeting> {
    let count = state.metrics().request_count.inc(&GREETING_LABELS);
    tracing::debug!(count, "greeting served");
    Json(Greeting::hello_world())
}
