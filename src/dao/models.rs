use serde::Deserialize;
use validator::Validate;

/// Game row stored in the catalog.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Validate)]
pub struct GameEntity {
    /// Unique identifier within the games table.
    #[validate(length(min = 1))]
    pub id: String,
    /// Display title of the game.
    #[validate(length(min = 1))]
    pub title: String,
    /// Platforms the game ships on, in declaration order.
    #[serde(default)]
    pub platform: Vec<String>,
}

/// Author row stored in the catalog.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Validate)]
pub struct AuthorEntity {
    /// Unique identifier within the authors table.
    #[validate(length(min = 1))]
    pub id: String,
    /// Public name of the reviewer.
    #[validate(length(min = 1))]
    pub name: String,
    /// Whether the author has been verified.
    pub verified: bool,
}

/// Review row stored in the catalog.
///
/// `author_id` and `game_id` reference rows of the other tables but nothing
/// enforces that those rows exist.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Validate)]
pub struct ReviewEntity {
    /// Unique identifier within the reviews table.
    #[validate(length(min = 1))]
    pub id: String,
    /// Score given by the author.
    pub rating: i32,
    /// Body of the review.
    pub content: String,
    /// Identifier of the author who wrote the review.
    pub author_id: String,
    /// Identifier of the reviewed game.
    pub game_id: String,
}

/// Fields accepted when appending a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGame {
    /// Title of the new game.
    pub title: String,
    /// Platforms; stored as an empty list when omitted.
    pub platform: Option<Vec<String>>,
}

/// Partial set of game fields to merge into an existing row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEdits {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement platform list.
    pub platform: Option<Vec<String>>,
}

impl GameEdits {
    /// Shallow-merge the present fields into `game`, leaving absent ones untouched.
    pub fn apply_to(&self, game: &mut GameEntity) {
        if let Some(title) = &self.title {
            game.title = title.clone();
        }
        if let Some(platform) = &self.platform {
            game.platform = platform.clone();
        }
    }
}

/// Full set of rows used to populate a catalog.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SeedData {
    /// Rows of the games table.
    #[serde(default)]
    pub games: Vec<GameEntity>,
    /// Rows of the authors table.
    #[serde(default)]
    pub authors: Vec<AuthorEntity>,
    /// Rows of the reviews table.
    #[serde(default)]
    pub reviews: Vec<ReviewEntity>,
}
