use async_graphql::{Context, ID, Object, Result};

use super::types::{AddGameInput, EditGameInput, Game};
use crate::{services::mutation_service, state::CatalogSession};

/// Root mutation type; every mutation acts on the games table.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a game under a generated id.
    async fn add_game(&self, ctx: &Context<'_>, game: AddGameInput) -> Result<Game> {
        let session = ctx.data::<CatalogSession>()?;
        let created = session
            .write(|catalog| mutation_service::add_game(catalog, game.into()))
            .await??;
        Ok(Game(created))
    }

    /// Delete a game and return the games that remain.
    async fn delete_game(&self, ctx: &Context<'_>, id: ID) -> Result<Vec<Game>> {
        let session = ctx.data::<CatalogSession>()?;
        let remaining = session
            .write(|catalog| mutation_service::delete_game(catalog, &id))
            .await?;
        Ok(remaining.into_iter().map(Game).collect())
    }

    /// Change the title and/or platforms of a game.
    async fn update_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
        edits: EditGameInput,
    ) -> Result<Option<Game>> {
        let session = ctx.data::<CatalogSession>()?;
        let updated = session
            .write(|catalog| mutation_service::update_game(catalog, &id, edits.into()))
            .await?;
        Ok(updated.map(Game))
    }
}
