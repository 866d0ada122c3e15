//! In-memory tables backing the graph.
//!
//! Rows are kept in insertion order and looked up by full scan; the tables
//! hold a handful of rows so no index is maintained.

use std::collections::HashSet;

use validator::Validate;

use crate::dao::{
    error::{CatalogError, CatalogResult, Table},
    models::{AuthorEntity, GameEntity, ReviewEntity, SeedData},
    seed::default_seed,
};

/// Single source of truth for games, authors and reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    games: Vec<GameEntity>,
    authors: Vec<AuthorEntity>,
    reviews: Vec<ReviewEntity>,
}

impl Catalog {
    /// Build a catalog from seed rows, rejecting invalid rows and duplicate ids.
    pub fn from_seed(seed: SeedData) -> CatalogResult<Self> {
        let SeedData {
            games,
            authors,
            reviews,
        } = seed;

        check_rows(Table::Games, &games, |game| &game.id)?;
        check_rows(Table::Authors, &authors, |author| &author.id)?;
        check_rows(Table::Reviews, &reviews, |review| &review.id)?;

        Ok(Self {
            games,
            authors,
            reviews,
        })
    }

    /// All games in insertion order.
    pub fn games(&self) -> &[GameEntity] {
        &self.games
    }

    /// All authors in insertion order.
    pub fn authors(&self) -> &[AuthorEntity] {
        &self.authors
    }

    /// All reviews in insertion order.
    pub fn reviews(&self) -> &[ReviewEntity] {
        &self.reviews
    }

    /// Append a game at the end of the table.
    pub fn push_game(&mut self, game: GameEntity) -> CatalogResult<()> {
        if self.games.iter().any(|existing| existing.id == game.id) {
            return Err(CatalogError::DuplicateId {
                table: Table::Games,
                id: game.id,
            });
        }
        self.games.push(game);
        Ok(())
    }

    /// Keep only the games matching `keep`, returning how many were removed.
    pub fn retain_games<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&GameEntity) -> bool,
    {
        let before = self.games.len();
        self.games.retain(keep);
        before - self.games.len()
    }

    /// Mutable access to the first game with the given id.
    pub fn game_mut(&mut self, id: &str) -> Option<&mut GameEntity> {
        self.games.iter_mut().find(|game| game.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let SeedData {
            games,
            authors,
            reviews,
        } = default_seed();
        Self {
            games,
            authors,
            reviews,
        }
    }
}

fn check_rows<T, F>(table: Table, rows: &[T], id_of: F) -> CatalogResult<()>
where
    T: Validate,
    F: Fn(&T) -> &String,
{
    let mut seen = HashSet::new();
    for row in rows {
        let id = id_of(row);
        if let Err(source) = row.validate() {
            return Err(CatalogError::InvalidRow {
                table,
                id: id.clone(),
                source,
            });
        }
        if !seen.insert(id.as_str()) {
            return Err(CatalogError::DuplicateId {
                table,
                id: id.clone(),
            });
        }
    }
    Ok(())
}
