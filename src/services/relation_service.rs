//! Edge resolution between catalog rows.
//!
//! Each edge is computed on its own from a parent row, so cyclic paths such as
//! game -> review -> game are only walked as deep as a caller asks.

use crate::dao::{
    catalog::Catalog,
    models::{AuthorEntity, GameEntity, ReviewEntity},
};

/// Reviews written about `game`, in table order.
pub fn game_reviews<'a>(catalog: &'a Catalog, game: &GameEntity) -> Vec<&'a ReviewEntity> {
    catalog
        .reviews()
        .iter()
        .filter(|review| review.game_id == game.id)
        .collect()
}

/// Reviews written by `author`, in table order.
pub fn author_reviews<'a>(catalog: &'a Catalog, author: &AuthorEntity) -> Vec<&'a ReviewEntity> {
    catalog
        .reviews()
        .iter()
        .filter(|review| review.author_id == author.id)
        .collect()
}

/// Author of `review`; `None` when the reference dangles.
pub fn review_author<'a>(catalog: &'a Catalog, review: &ReviewEntity) -> Option<&'a AuthorEntity> {
    catalog
        .authors()
        .iter()
        .find(|author| author.id == review.author_id)
}

/// Game reviewed by `review`; `None` when the reference dangles.
pub fn review_game<'a>(catalog: &'a Catalog, review: &ReviewEntity) -> Option<&'a GameEntity> {
    catalog
        .games()
        .iter()
        .find(|game| game.id == review.game_id)
}
