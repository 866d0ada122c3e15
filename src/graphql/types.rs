//! GraphQL object and input types.
//!
//! Scalar fields read straight from the wrapped row. Relationship fields go
//! back to the catalog session each time they are selected.

use async_graphql::{Context, ID, InputObject, Object, Result};

use crate::{
    dao::models::{AuthorEntity, GameEdits, GameEntity, NewGame, ReviewEntity},
    services::relation_service,
    state::CatalogSession,
};

/// A video game that can be reviewed.
pub struct Game(pub GameEntity);

/// Someone who writes reviews.
pub struct Author(pub AuthorEntity);

/// A rating left by an author on a game.
pub struct Review(pub ReviewEntity);

#[Object]
impl Game {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn platform(&self) -> &[String] {
        &self.0.platform
    }

    /// Reviews of this game; empty when nobody reviewed it yet.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let session = ctx.data::<CatalogSession>()?;
        let reviews = session
            .read(|catalog| {
                relation_service::game_reviews(catalog, &self.0)
                    .into_iter()
                    .cloned()
                    .map(Review)
                    .collect::<Vec<_>>()
            })
            .await;
        Ok(reviews)
    }
}

#[Object]
impl Author {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn verified(&self) -> bool {
        self.0.verified
    }

    /// Reviews written by this author; empty when none exist yet.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let session = ctx.data::<CatalogSession>()?;
        let reviews = session
            .read(|catalog| {
                relation_service::author_reviews(catalog, &self.0)
                    .into_iter()
                    .cloned()
                    .map(Review)
                    .collect::<Vec<_>>()
            })
            .await;
        Ok(reviews)
    }
}

#[Object]
impl Review {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn rating(&self) -> i32 {
        self.0.rating
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    #[graphql(name = "author_id")]
    async fn author_id(&self) -> ID {
        ID(self.0.author_id.clone())
    }

    #[graphql(name = "game_id")]
    async fn game_id(&self) -> ID {
        ID(self.0.game_id.clone())
    }

    /// Author of the review, `null` when the author no longer exists.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let session = ctx.data::<CatalogSession>()?;
        let author = session
            .read(|catalog| relation_service::review_author(catalog, &self.0).cloned())
            .await;
        Ok(author.map(Author))
    }

    /// Reviewed game, `null` when the game has been deleted.
    async fn game(&self, ctx: &Context<'_>) -> Result<Option<Game>> {
        let session = ctx.data::<CatalogSession>()?;
        let game = session
            .read(|catalog| relation_service::review_game(catalog, &self.0).cloned())
            .await;
        Ok(game.map(Game))
    }
}

/// Fields of a game to create.
#[derive(InputObject, Debug)]
pub struct AddGameInput {
    /// Title of the game.
    pub title: String,
    /// Platforms the game ships on.
    pub platform: Option<Vec<String>>,
}

impl From<AddGameInput> for NewGame {
    fn from(input: AddGameInput) -> Self {
        Self {
            title: input.title,
            platform: input.platform,
        }
    }
}

/// Fields of a game to change; omitted fields are left as they are.
#[derive(InputObject, Debug)]
pub struct EditGameInput {
    /// New title.
    pub title: Option<String>,
    /// New platform list, replacing the old one entirely.
    pub platform: Option<Vec<String>>,
}

impl From<EditGameInput> for GameEdits {
    fn from(input: EditGameInput) -> Self {
        Self {
            title: input.title,
            platform: input.platform,
        }
    }
}
