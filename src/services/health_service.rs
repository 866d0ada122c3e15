use tracing::debug;

use crate::{
    dto::{format_system_time, health::HealthResponse},
    state::SharedState,
};

/// Report liveness along with the current size of each table.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let counts = state.counts().await;
    debug!(?counts, "health check");

    HealthResponse::ok(format_system_time(state.started_at()), counts)
}
