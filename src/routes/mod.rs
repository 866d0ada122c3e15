//! HTTP surface of the service.

use axum::Router;

use crate::state::SharedState;

/// Swagger UI for the REST routes.
pub mod docs;
/// GraphQL endpoint, explorer and SDL.
pub mod graphql;
/// Health check route.
pub mod health;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router().merge(graphql::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
