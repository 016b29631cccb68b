use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::models::character::{
    Character, CharacterAction, CharacterActionCreateRequest, CharacterCreateRequest,
};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/characters/", post(create_character))
        // curl http://localhost:8080/characters/game_version/trouble_brewing
        .route(
            "/characters/game_version/:game_version",
            get(get_characters_by_game_version),
        )
        .route("/characteractions/", post(create_character_action))
        // curl http://localhost:8080/character_actions/first_night/trouble_brewing
        .route(
            "/character_actions/first_night/:game_version",
            get(get_first_night_actions),
        )
        .with_state(state)
}

/// Persists an admin-created character row. Gameplay reads come from the
/// file catalog, not from these rows.
async fn create_character(
    State(state): State<AppState>,
    Json(req): Json<CharacterCreateRequest>,
) -> impl IntoResponse {
    let character = state
        .store
        .insert_character(Character {
            character_id: 0,
            character_name: req.character_name,
            designation: req.designation,
            game_version: req.game_version,
            character_description: req.character_description,
            power_usage_count: req.power_usage_count,
            power_usage_count_max: req.power_usage_count_max,
            first_day_order: req.first_day_order,
            first_night_order: req.first_night_order,
            night_order: req.night_order,
        })
        .await;
    (
        StatusCode::OK,
        Json(json!({"result": "success", "character": character})),
    )
}

async fn get_characters_by_game_version(
    State(state): State<AppState>,
    Path(game_version): Path<String>,
) -> impl IntoResponse {
    match state.catalog.characters_for_version(&game_version).await {
        Ok(characters) => (
            StatusCode::OK,
            Json(json!({"result": "success", "characters": characters})),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}

async fn create_character_action(
    State(state): State<AppState>,
    Json(req): Json<CharacterActionCreateRequest>,
) -> impl IntoResponse {
    let action = state
        .store
        .insert_character_action(CharacterAction {
            character_action_id: 0,
            character_id: req.character_id,
            time_of_day: req.time_of_day,
            receive_information: req.receive_information,
            information_received: req.information_received,
            first_night: req.first_night,
            make_action: req.make_action,
            action: req.action,
            response_required: req.response_required,
        })
        .await;
    (
        StatusCode::OK,
        Json(json!({"result": "success", "character_action": action})),
    )
}

async fn get_first_night_actions(
    State(state): State<AppState>,
    Path(game_version): Path<String>,
) -> impl IntoResponse {
    match state.catalog.first_night_actions(&game_version).await {
        Ok(actions) => (
            StatusCode::OK,
            Json(json!({"result": "success", "actions": actions})),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}
