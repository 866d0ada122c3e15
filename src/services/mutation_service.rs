use tracing::info;
use uuid::Uuid;

use crate::{
    dao::{
        catalog::Catalog,
        models::{GameEdits, GameEntity, NewGame},
    },
    error::ServiceError,
};

/// Append a game under a freshly generated id and return the stored row.
pub fn add_game(catalog: &mut Catalog, input: NewGame) -> Result<GameEntity, ServiceError> {
    let NewGame { title, platform } = input;
    let game = GameEntity {
        id: Uuid::new_v4().to_string(),
        title,
        platform: platform.unwrap_or_default(),
    };

    catalog.push_game(game.clone())?;
    info!(game_id = %game.id, title = %game.title, "game added");

    Ok(game)
}

/// Remove every game with the given id and return the remaining table.
///
/// An unknown id leaves the table unchanged.
pub fn delete_game(catalog: &mut Catalog, id: &str) -> Vec<GameEntity> {
    let removed = catalog.retain_games(|game| game.id != id);
    info!(game_id = %id, removed, "game delete processed");

    catalog.games().to_vec()
}

/// Merge `edits` into the game with the given id.
///
/// Returns the updated row, or `None` when no game matched.
pub fn update_game(catalog: &mut Catalog, id: &str, edits: GameEdits) -> Option<GameEntity> {
    let Some(game) = catalog.game_mut(id) else {
        info!(game_id = %id, "game update skipped: no such game");
        return None;
    };

    edits.apply_to(game);
    info!(
        game_id = %id,
        title_changed = edits.title.is_some(),
        platform_changed = edits.platform.is_some(),
        "game updated"
    );

    Some(game.clone())
}
