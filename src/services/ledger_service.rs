use std::collections::HashMap;

use crate::error::ServiceError;
use crate::models::ledger::{
    ActionRecord, ActionSend, ActionType, InformationRecord, InformationSend,
};
use crate::models::night::NightInfoRequest;
use crate::state::AppState;

/// Records the first-night information handed to each player as
/// `night_info` actions on turn 1. The append is all-or-nothing: one bad
/// player id leaves the ledger untouched.
pub async fn record_night_info_batch(
    state: &AppState,
    request: NightInfoRequest,
) -> Result<usize, ServiceError> {
    let records: Vec<ActionRecord> = request
        .players
        .iter()
        .map(|p| ActionRecord {
            action_id: 0,
            player_id: p.player_id.clone(),
            action_type: ActionType::NightInfo,
            action_input: p.information_received.clone(),
            turn: 1,
            response_required: p.response_required,
            information_id: 0,
        })
        .collect();
    let count = state.store.append_actions_batch(records).await?;
    log::info!(
        "recorded night info for {count} players in game {}",
        request.game_code
    );
    Ok(count)
}

pub async fn add_action(state: &AppState, send: ActionSend) -> Result<ActionRecord, ServiceError> {
    state
        .store
        .append_action(ActionRecord {
            action_id: 0,
            player_id: send.player_id,
            action_type: send.action_type,
            action_input: send.action_input,
            turn: send.turn,
            response_required: send.response_required,
            information_id: 0,
        })
        .await
}

pub async fn add_information(
    state: &AppState,
    send: InformationSend,
) -> Result<InformationRecord, ServiceError> {
    state
        .store
        .append_information(InformationRecord {
            information_id: 0,
            player_id: send.player_id,
            turn: send.turn,
            information_type: send.information_type,
            information_input: send.information_input,
            response_required: send.response_required,
            action_id: 0,
        })
        .await
}

pub async fn delete_all_actions(state: &AppState) -> usize {
    let count = state.store.clear_actions().await;
    log::warn!("cleared the action ledger ({count} records)");
    count
}

/// One player's actions and information at the game's current turn.
pub async fn get_player_turn_actions(
    state: &AppState,
    game_code: &str,
    player_id: &str,
) -> Result<(Vec<ActionRecord>, Vec<InformationRecord>), ServiceError> {
    let game = state.store.get_game(game_code).await?;
    let actions = state.store.actions_for(player_id, game.turn).await;
    let information = state.store.information_for(player_id, game.turn).await;
    Ok((actions, information))
}

/// All players' actions and information at the game's current turn, each
/// collection grouped by its own records' player ids.
pub async fn get_all_players_turn_actions(
    state: &AppState,
    game_code: &str,
) -> Result<
    (
        HashMap<String, Vec<ActionRecord>>,
        HashMap<String, Vec<InformationRecord>>,
    ),
    ServiceError,
> {
    let game = state.store.get_game(game_code).await?;

    let mut actions: HashMap<String, Vec<ActionRecord>> = HashMap::new();
    for action in state.store.actions_at_turn(game.turn).await {
        actions.entry(action.player_id.clone()).or_default().push(action);
    }

    let mut information: HashMap<String, Vec<InformationRecord>> = HashMap::new();
    for info in state.store.information_at_turn(game.turn).await {
        information.entry(info.player_id.clone()).or_default().push(info);
    }

    Ok((actions, information))
}
