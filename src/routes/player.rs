use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;

use crate::models::player::{BatchAssignRequest, PlayerCreateRequest, PlayerUpdate};
use crate::services::player_service;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        // curl -X POST http://localhost:8080/players/ -H 'Content-Type: application/json' \
        //   -d '{"game_code": "AB12CD", "player_name": "Alice"}'
        .route("/players/", post(create_player))
        // curl http://localhost:8080/players/game/{game_code}
        .route("/players/game/:game_code", get(get_players_by_game))
        // curl -X PUT http://localhost:8080/players/update_multiple
        .route("/players/update_multiple", put(update_multiple_players))
        // curl http://localhost:8080/players/{player_id}
        .route("/players/:player_id", get(get_player).put(update_player))
        .with_state(state)
}

async fn create_player(
    State(state): State<AppState>,
    Json(req): Json<PlayerCreateRequest>,
) -> impl IntoResponse {
    match player_service::create_player(&state, req.game_code, req.player_name).await {
        Ok(player) => (
            StatusCode::OK,
            Json(json!({"result": "success", "player": player})),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}

async fn get_players_by_game(
    State(state): State<AppState>,
    Path(game_code): Path<String>,
) -> impl IntoResponse {
    let players = player_service::get_players_by_game(&state, &game_code).await;
    (
        StatusCode::OK,
        Json(json!({"result": "success", "players": players})),
    )
}

async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> impl IntoResponse {
    match player_service::get_player(&state, &player_id).await {
        Ok(player) => (
            StatusCode::OK,
            Json(json!({"result": "success", "player": player})),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}

async fn update_multiple_players(
    State(state): State<AppState>,
    Json(req): Json<BatchAssignRequest>,
) -> impl IntoResponse {
    match player_service::update_players_batch(&state, &req.players).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"result": "success", "players": req.players})),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}

async fn update_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    Json(update): Json<PlayerUpdate>,
) -> impl IntoResponse {
    match player_service::update_player(&state, &player_id, update).await {
        Ok(player) => (
            StatusCode::OK,
            Json(json!({"result": "success", "player": player})),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}
