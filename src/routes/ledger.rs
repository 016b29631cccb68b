use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::models::ledger::{ActionSend, InformationSend};
use crate::services::ledger_service;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/player/add_information", post(add_information))
        .route("/player/add_action", post(add_action))
        // curl -X DELETE http://localhost:8080/actions/delete_all
        .route("/actions/delete_all", delete(delete_all_actions))
        // curl http://localhost:8080/player_actions/{game_code}/{player_id}
        .route(
            "/player_actions/:game_code/:player_id",
            get(get_player_turn_actions),
        )
        // curl http://localhost:8080/all_players_info/{game_code}
        .route("/all_players_info/:game_code", get(get_all_players_info))
        .with_state(state)
}

async fn add_information(
    State(state): State<AppState>,
    Json(req): Json<InformationSend>,
) -> impl IntoResponse {
    match ledger_service::add_information(&state, req).await {
        Ok(information) => (
            StatusCode::OK,
            Json(json!({"result": "success", "information": information})),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}

async fn add_action(
    State(state): State<AppState>,
    Json(req): Json<ActionSend>,
) -> impl IntoResponse {
    match ledger_service::add_action(&state, req).await {
        Ok(action) => (
            StatusCode::OK,
            Json(json!({"result": "success", "action": action})),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}

async fn delete_all_actions(State(state): State<AppState>) -> impl IntoResponse {
    let count = ledger_service::delete_all_actions(&state).await;
    (
        StatusCode::OK,
        Json(json!({
            "result": "success",
            "message": "All actions deleted successfully",
            "deleted": count
        })),
    )
}

async fn get_player_turn_actions(
    State(state): State<AppState>,
    Path((game_code, player_id)): Path<(String, String)>,
) -> impl IntoResponse {
    match ledger_service::get_player_turn_actions(&state, &game_code, &player_id).await {
        Ok((actions, information)) => (
            StatusCode::OK,
            Json(json!({
                "result": "success",
                "actions": actions,
                "information": information
            })),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}

async fn get_all_players_info(
    State(state): State<AppState>,
    Path(game_code): Path<String>,
) -> impl IntoResponse {
    match ledger_service::get_all_players_turn_actions(&state, &game_code).await {
        Ok((actions, information)) => (
            StatusCode::OK,
            Json(json!({
                "result": "success",
                "actions": actions,
                "information": information
            })),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}
