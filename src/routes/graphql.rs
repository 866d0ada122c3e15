use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::{graphql, state::SharedState};

const GRAPHQL_PATH: &str = "/graphql";

/// Routes serving the GraphQL endpoint, its explorer page and the schema SDL.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route("/graphql/sdl", get(schema_sdl))
}

/// Execute a GraphQL request against the catalog.
async fn graphql_handler(State(state): State<SharedState>, req: GraphQLRequest) -> GraphQLResponse {
    graphql::execute(&state, req.into_inner()).await.into()
}

/// Serve the GraphiQL explorer pointed at the endpoint.
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Return the schema in SDL form.
#[utoipa::path(
    get,
    path = "/graphql/sdl",
    tag = "graphql",
    responses(
        (status = 200, description = "Schema definition language document", body = String, content_type = "text/plain")
    )
)]
pub async fn schema_sdl(State(state): State<SharedState>) -> String {
    state.schema().sdl()
}
