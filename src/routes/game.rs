use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::models::game::{GameCreateRequest, GameUpdate};
use crate::services::game_service;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router {
    Router::new()
        // curl -X POST http://localhost:8080/games/ -H 'Content-Type: application/json' -d '{}'
        .route("/games/", post(create_game).get(list_games))
        // curl http://localhost:8080/games/{game_code}
        .route("/games/:game_code", get(get_game).put(update_game))
        .with_state(state)
}

async fn create_game(
    State(state): State<AppState>,
    Json(req): Json<GameCreateRequest>,
) -> impl IntoResponse {
    match game_service::create_game(&state, req).await {
        Ok(game_code) => (
            StatusCode::OK,
            Json(json!({"result": "success", "game_code": game_code, "errors": []})),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "game_code": null, "errors": [e.to_string()]})),
        ),
    }
}

async fn list_games(State(state): State<AppState>) -> impl IntoResponse {
    let games = game_service::list_games(&state).await;
    (
        StatusCode::OK,
        Json(json!({"result": "success", "games": games})),
    )
}

async fn get_game(
    State(state): State<AppState>,
    Path(game_code): Path<String>,
) -> impl IntoResponse {
    match game_service::get_game(&state, &game_code).await {
        Ok(game) => (
            StatusCode::OK,
            Json(json!({"result": "success", "game": game})),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}

async fn update_game(
    State(state): State<AppState>,
    Path(game_code): Path<String>,
    Json(update): Json<GameUpdate>,
) -> impl IntoResponse {
    match game_service::update_game(&state, &game_code, update).await {
        Ok(game) => (
            StatusCode::OK,
            Json(json!({"result": "success", "game": game})),
        ),
        Err(e) => (
            e.status_code(),
            Json(json!({"result": "failure", "error": e.to_string()})),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    #[tokio::test]
    async fn create_then_fetch_game() {
        let state = AppState::new();
        let app = routes(state);

        let request = Request::builder()
            .method("POST")
            .uri("/games/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"player_count": 7}"#))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let envelope: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope["result"], "success");
        let game_code = envelope["game_code"].as_str().unwrap().to_string();
        assert_eq!(game_code.len(), 6);

        let request = Request::builder()
            .uri(format!("/games/{game_code}"))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let envelope: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope["game"]["player_count"], 7);
        assert_eq!(envelope["game"]["turn"], 1);
    }

    #[tokio::test]
    async fn fetching_a_missing_game_is_404() {
        let state = AppState::new();
        let app = routes(state);

        let request = Request::builder()
            .uri("/games/ZZZZZZ")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let envelope: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope["result"], "failure");
    }
}
