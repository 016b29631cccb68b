use std::collections::HashMap;

use crate::error::ServiceError;
use crate::models::character::{Character, CharacterAction};
use crate::models::night::FirstNightPlayer;
use crate::state::AppState;

/// Computes the ordered set of players who act on the first night by
/// joining live player state against the rule catalog for the game's
/// version.
///
/// A player is eligible only when its character both has a first-night
/// action and carries a first-night order; everyone else is skipped
/// without error. An empty result is a valid outcome, not a failure.
pub async fn resolve_first_night(
    state: &AppState,
    game_code: &str,
    game_version: &str,
) -> Result<Vec<FirstNightPlayer>, ServiceError> {
    let players = state.store.players_by_game(game_code).await;
    if players.is_empty() {
        return Err(ServiceError::NotFound(format!(
            "players for game {game_code}"
        )));
    }

    let actions = state.catalog.load_character_actions(game_version).await?;
    let characters = state.catalog.load_characters(game_version).await?;

    let first_night_actions: HashMap<u32, CharacterAction> = actions
        .into_iter()
        .filter(|a| a.first_night)
        .map(|a| (a.character_id, a))
        .collect();
    let ordered_characters: HashMap<u32, Character> = characters
        .into_iter()
        .filter(|c| c.first_night_order.map_or(false, |order| order > 0))
        .map(|c| (c.character_id, c))
        .collect();

    let mut eligible = Vec::new();
    for player in players {
        let Some(action) = first_night_actions.get(&player.character_id) else {
            continue;
        };
        let Some(character) = ordered_characters.get(&player.character_id) else {
            continue;
        };
        eligible.push(FirstNightPlayer {
            player_id: player.player_id,
            player_name: player.player_name,
            character_id: player.character_id,
            dead: player.dead,
            vote_token_remaining: player.vote_token_remaining,
            protected: player.protected,
            character_name: character.character_name.clone(),
            designation: character.designation,
            first_night_order: character.first_night_order.unwrap_or_default(),
            character_action_info: action.clone(),
        });
    }
    eligible.sort_by_key(|p| p.first_night_order);
    Ok(eligible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game::GameCreateRequest;
    use crate::models::player::PlayerUpdate;
    use crate::services::{game_service, player_service};

    async fn game_with_characters(assignments: &[u32]) -> (AppState, String) {
        let state = AppState::new();
        let code = game_service::create_game(&state, GameCreateRequest::default())
            .await
            .unwrap();
        for (i, character_id) in assignments.iter().enumerate() {
            let player = player_service::create_player(&state, code.clone(), format!("Player {i}"))
                .await
                .unwrap();
            if *character_id != 0 {
                player_service::update_player(
                    &state,
                    &player.player_id,
                    PlayerUpdate {
                        character_id: Some(*character_id),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
            }
        }
        (state, code)
    }

    #[tokio::test]
    async fn only_players_with_first_night_characters_are_selected() {
        // 4 = Chef (first night), 7 = Undertaker (later nights only),
        // 0 = unassigned.
        let (state, code) = game_with_characters(&[4, 7, 0]).await;
        let eligible = resolve_first_night(&state, &code, "Trouble Brewing")
            .await
            .unwrap();
        assert_eq!(eligible.len(), 1);
        let chef = &eligible[0];
        assert_eq!(chef.character_id, 4);
        assert_eq!(chef.character_name, "Chef");
        assert!(chef.first_night_order > 0);
        assert!(chef.character_action_info.first_night);
        assert!(!chef.dead);
    }

    #[tokio::test]
    async fn result_is_ordered_by_first_night_order() {
        // Fortune Teller (6) acts after the Poisoner (11) on night one.
        let (state, code) = game_with_characters(&[6, 11]).await;
        let eligible = resolve_first_night(&state, &code, "trouble_brewing")
            .await
            .unwrap();
        assert_eq!(eligible.len(), 2);
        assert!(eligible[0].first_night_order < eligible[1].first_night_order);
        assert_eq!(eligible[0].character_id, 11);
    }

    #[tokio::test]
    async fn no_eligible_players_is_an_empty_success() {
        let (state, code) = game_with_characters(&[0, 0]).await;
        let eligible = resolve_first_night(&state, &code, "trouble_brewing")
            .await
            .unwrap();
        assert!(eligible.is_empty());
    }

    #[tokio::test]
    async fn game_without_players_is_not_found() {
        let state = AppState::new();
        let code = game_service::create_game(&state, GameCreateRequest::default())
            .await
            .unwrap();
        let err = resolve_first_night(&state, &code, "trouble_brewing")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn unknown_version_is_a_catalog_miss() {
        let (state, code) = game_with_characters(&[4]).await;
        let err = resolve_first_night(&state, &code, "Bad Moon Rising")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::CatalogMissing(_)));
    }
}
