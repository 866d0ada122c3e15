use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the REST routes next to the GraphQL endpoint.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::graphql::schema_sdl,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "graphql", description = "GraphQL schema introspection"),
    )
)]
pub struct ApiDoc;
