//! Sample rows loaded into the catalog when no seed is configured.

use crate::dao::models::{AuthorEntity, GameEntity, ReviewEntity, SeedData};

/// Built-in seed shipped with the binary.
pub fn default_seed() -> SeedData {
    SeedData {
        games: default_games(),
        authors: default_authors(),
        reviews: default_reviews(),
    }
}

fn game(id: &str, title: &str, platform: &[&str]) -> GameEntity {
    GameEntity {
        id: id.into(),
        title: title.into(),
        platform: platform.iter().map(|p| (*p).to_string()).collect(),
    }
}

fn author(id: &str, name: &str, verified: bool) -> AuthorEntity {
    AuthorEntity {
        id: id.into(),
        name: name.into(),
        verified,
    }
}

fn review(id: &str, rating: i32, author_id: &str, game_id: &str) -> ReviewEntity {
    ReviewEntity {
        id: id.into(),
        rating,
        content: "lorem ipsum".into(),
        author_id: author_id.into(),
        game_id: game_id.into(),
    }
}

fn default_games() -> Vec<GameEntity> {
    vec![
        game("1", "Zelda, Tears of the Kingdom", &["Switch"]),
        game("2", "Final Fantasy 7 Remake", &["PS5", "Xbox"]),
        game("3", "Elden Ring", &["PS5", "Xbox", "PC"]),
        game("4", "Mario Kart", &["Switch"]),
        game("5", "Pokemon Scarlet", &["PS5", "Xbox", "PC"]),
    ]
}

fn default_authors() -> Vec<AuthorEntity> {
    vec![
        author("1", "mario", true),
        author("2", "yoshi", false),
        author("3", "peach", true),
    ]
}

fn default_reviews() -> Vec<ReviewEntity> {
    vec![
        review("1", 9, "1", "2"),
        review("2", 10, "2", "1"),
        review("3", 7, "3", "3"),
        review("4", 5, "2", "4"),
        review("5", 8, "2", "5"),
        review("6", 7, "1", "2"),
        review("7", 10, "3", "1"),
    ]
}
