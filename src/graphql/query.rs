use async_graphql::{Context, ID, Object, Result};

use super::types::{Author, Game, Review};
use crate::{services::query_service, state::CatalogSession};

/// Root query type for the GraphQL schema.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every game, in insertion order.
    async fn games(&self, ctx: &Context<'_>) -> Result<Vec<Game>> {
        let session = ctx.data::<CatalogSession>()?;
        Ok(session
            .read(|catalog| {
                query_service::list_games(catalog)
                    .iter()
                    .cloned()
                    .map(Game)
                    .collect::<Vec<_>>()
            })
            .await)
    }

    /// A single game by id.
    async fn game(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Game>> {
        let session = ctx.data::<CatalogSession>()?;
        Ok(session
            .read(|catalog| query_service::get_game(catalog, &id).cloned())
            .await
            .map(Game))
    }

    /// Every review, in insertion order.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let session = ctx.data::<CatalogSession>()?;
        Ok(session
            .read(|catalog| {
                query_service::list_reviews(catalog)
                    .iter()
                    .cloned()
                    .map(Review)
                    .collect::<Vec<_>>()
            })
            .await)
    }

    /// A single review by id.
    async fn review(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Review>> {
        let session = ctx.data::<CatalogSession>()?;
        Ok(session
            .read(|catalog| query_service::get_review(catalog, &id).cloned())
            .await
            .map(Review))
    }

    /// Every author, in insertion order.
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let session = ctx.data::<CatalogSession>()?;
        Ok(session
            .read(|catalog| {
                query_service::list_authors(catalog)
                    .iter()
                    .cloned()
                    .map(Author)
                    .collect::<Vec<_>>()
            })
            .await)
    }

    /// A single author by id.
    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let session = ctx.data::<CatalogSession>()?;
        Ok(session
            .read(|catalog| query_service::get_author(catalog, &id).cloned())
            .await
            .map(Author))
    }
}
