use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use serde_json::json;

use crate::models::night::{FirstNightRequest, NightInfoRequest};
use crate::services::{ledger_service, night_service};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/game/first_night_players", post(first_night_players))
        .route("/game/update_first_night_info", post(update_first_night_info))
        .with_state(state)
}

async fn first_night_players(
    State(state): State<AppState>,
    Json(req): Json<FirstNightRequest>,
) -> impl IntoResponse {
    match night_service::resolve_first_night(&state, &req.game_code, &req.game_version).await {
        Ok(players) if players.is_empty() => (
            StatusCode::OK,
            Json(json!({
                "result": "success",
                "players": players,
                "message": "No players have first-night actions."
            })),
        ),
        Ok(players) => (
            StatusCode::OK,
            Json(json!({"result": "success", "players": players})),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}

async fn update_first_night_info(
    State(state): State<AppState>,
    Json(req): Json<NightInfoRequest>,
) -> impl IntoResponse {
    match ledger_service::record_night_info_batch(&state, req).await {
        Ok(count) => (
            StatusCode::OK,
            Json(json!({
                "result": "success",
                "message": "Information saved successfully",
                "recorded": count
            })),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}
