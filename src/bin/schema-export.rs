//! Print the GraphQL SDL, or the OpenAPI document of the REST routes with `--openapi`.

use std::env;

use anyhow::Context;
use game_reviews_graph::{graphql::create_schema, services::documentation::ApiDoc};
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    if env::args().skip(1).any(|arg| arg == "--openapi") {
        let doc = ApiDoc::openapi()
            .to_pretty_json()
            .context("serializing OpenAPI document")?;
        println!("{doc}");
    } else {
        println!("{}", create_schema().sdl());
    }
    Ok(())
}
