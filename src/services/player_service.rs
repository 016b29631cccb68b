use chrono::Utc;

use crate::error::ServiceError;
use crate::models::player::{
    CharacterAssignment, CharacterSummary, Player, PlayerDetail, PlayerUpdate,
};
use crate::state::AppState;

/// Creates a player in the given game. Status flags always start from the
/// same baseline regardless of input; the store enforces that the game
/// exists and picks a unique player id.
pub async fn create_player(
    state: &AppState,
    game_code: String,
    player_name: String,
) -> Result<Player, ServiceError> {
    let player = Player {
        player_id: String::new(),
        game_code,
        player_name,
        character_id: 0,
        dead: false,
        vote_token_remaining: true,
        protected: Some(false),
        creation_date: Utc::now(),
    };
    let player = state.store.insert_player(player).await?;
    log::info!("created player {} in game {}", player.player_id, player.game_code);
    Ok(player)
}

pub async fn get_players_by_game(state: &AppState, game_code: &str) -> Vec<Player> {
    state.store.players_by_game(game_code).await
}

/// Fetches a player enriched with the parent game's turn and, once a
/// character is assigned, the catalog entry for that character under the
/// game's version.
pub async fn get_player(state: &AppState, player_id: &str) -> Result<PlayerDetail, ServiceError> {
    let player = state.store.get_player(player_id).await?;
    let game = state.store.get_game(&player.game_code).await?;

    let character = if player.character_id != 0 {
        let characters = state.catalog.load_characters(&game.game_version).await?;
        characters
            .into_iter()
            .find(|c| c.character_id == player.character_id)
            .map(|c| CharacterSummary {
                character_id: c.character_id,
                character_name: c.character_name,
                designation: c.designation,
                character_description: c.character_description,
            })
    } else {
        None
    };

    Ok(PlayerDetail {
        player_id: player.player_id,
        player_name: player.player_name,
        game_code: player.game_code,
        turn: game.turn,
        character_id: player.character_id,
        vote_token_remaining: player.vote_token_remaining,
        creation_date: player.creation_date,
        dead: player.dead,
        protected: player.protected,
        character,
    })
}

pub async fn update_player(
    state: &AppState,
    player_id: &str,
    update: PlayerUpdate,
) -> Result<Player, ServiceError> {
    state.store.update_player(player_id, update).await
}

/// Assigns characters to players one by one. Halts at the first unknown
/// player id and reports it; earlier assignments in the batch stay
/// committed. Callers that need all-or-nothing should not use this path.
pub async fn update_players_batch(
    state: &AppState,
    assignments: &[CharacterAssignment],
) -> Result<(), ServiceError> {
    for assignment in assignments {
        state
            .store
            .update_player(
                &assignment.player_id,
                PlayerUpdate {
                    character_id: Some(assignment.character_id),
                    ..Default::default()
                },
            )
            .await
            .map_err(|_| {
                ServiceError::NotFound(format!("player {}", assignment.player_id))
            })?;
    }
    Ok(())
}
