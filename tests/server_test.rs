use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use grimoire_server::app;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create_game(app: &Router) -> String {
    let (status, envelope) = send_json(
        app,
        "POST",
        "/games/",
        json!({"player_count": 7, "game_version": "Trouble Brewing"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope["result"], "success");
    envelope["game_code"].as_str().unwrap().to_string()
}

async fn create_player(app: &Router, game_code: &str, name: &str) -> String {
    let (status, envelope) = send_json(
        app,
        "POST",
        "/players/",
        json!({"game_code": game_code, "player_name": name}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    envelope["player"]["player_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn full_game_setup_scenario() {
    let app = app::create_app();

    let game_code = create_game(&app).await;
    assert_eq!(game_code.len(), 6);
    assert!(game_code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

    let (status, envelope) = send(&app, "GET", &format!("/games/{game_code}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope["game"]["turn"], 1);
    assert_eq!(envelope["game"]["time_of_day"], "day");

    // New player starts without a character.
    let alice = create_player(&app, &game_code, "Alice").await;
    let (_, envelope) = send(&app, "GET", &format!("/players/game/{game_code}")).await;
    assert_eq!(envelope["players"].as_array().unwrap().len(), 1);
    assert_eq!(envelope["players"][0]["character_id"], 0);

    // Assign the Fortune Teller via the batch endpoint.
    let (status, envelope) = send_json(
        &app,
        "PUT",
        "/players/update_multiple",
        json!({"players": [{"player_id": alice, "character_id": 6}]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope["result"], "success");

    // The enriched fetch merges in catalog detail for the game's version.
    let (status, envelope) = send(&app, "GET", &format!("/players/{alice}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope["player"]["turn"], 1);
    assert_eq!(envelope["player"]["character"]["character_name"], "Fortune Teller");
    assert_eq!(envelope["player"]["character"]["designation"], "villager");
}

#[tokio::test]
async fn first_night_resolution_and_night_info() {
    let app = app::create_app();
    let game_code = create_game(&app).await;

    let alice = create_player(&app, &game_code, "Alice").await;
    let bob = create_player(&app, &game_code, "Bob").await;
    let carol = create_player(&app, &game_code, "Carol").await;

    // Alice: Poisoner (first night), Bob: Imp (not first night),
    // Carol stays unassigned.
    send_json(
        &app,
        "PUT",
        "/players/update_multiple",
        json!({"players": [
            {"player_id": alice, "character_id": 11},
            {"player_id": bob, "character_id": 13}
        ]}),
    )
    .await;

    let (status, envelope) = send_json(
        &app,
        "POST",
        "/game/first_night_players",
        json!({"game_code": game_code, "game_version": "Trouble Brewing"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let players = envelope["players"].as_array().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0]["player_id"], alice.as_str());
    assert_eq!(players[0]["character_name"], "Poisoner");
    assert_eq!(players[0]["character_action_info"]["first_night"], true);

    // Record the night info the storyteller handed out.
    let (status, envelope) = send_json(
        &app,
        "POST",
        "/game/update_first_night_info",
        json!({"game_code": game_code, "players": [{
            "player_id": alice,
            "character_id": 11,
            "designation": "imp",
            "first_night_order": 3,
            "receives_information": false,
            "information_received": "You poisoned Carol.",
            "action": "Choose a player to poison tonight and tomorrow day.",
            "response_required": true
        }]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope["recorded"], 1);

    // It lands as a night_info action at the game's current turn.
    let (status, envelope) =
        send(&app, "GET", &format!("/player_actions/{game_code}/{alice}")).await;
    assert_eq!(status, StatusCode::OK);
    let actions = envelope["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0]["action_type"], "night_info");
    assert_eq!(actions[0]["turn"], 1);
}

#[tokio::test]
async fn empty_first_night_is_a_distinct_success() {
    let app = app::create_app();
    let game_code = create_game(&app).await;
    create_player(&app, &game_code, "Alice").await;

    let (status, envelope) = send_json(
        &app,
        "POST",
        "/game/first_night_players",
        json!({"game_code": game_code, "game_version": "trouble_brewing"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope["result"], "success");
    assert!(envelope["players"].as_array().unwrap().is_empty());
    assert_eq!(envelope["message"], "No players have first-night actions.");
}

#[tokio::test]
async fn action_round_trip_and_aggregation() {
    let app = app::create_app();
    let game_code = create_game(&app).await;
    let alice = create_player(&app, &game_code, "Alice").await;
    let bob = create_player(&app, &game_code, "Bob").await;

    let (status, _) = send_json(
        &app,
        "POST",
        "/player/add_action",
        json!({
            "player_id": alice,
            "action_type": "vote",
            "action_input": "Bob",
            "response_required": false,
            "turn": 1
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(
        &app,
        "POST",
        "/player/add_information",
        json!({
            "player_id": bob,
            "information_type": "night_info",
            "information_input": "You are nominated.",
            "response_required": true,
            "turn": 1
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Per-player fetch returns the recorded action untouched.
    let (_, envelope) = send(&app, "GET", &format!("/player_actions/{game_code}/{alice}")).await;
    let actions = envelope["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0]["action_type"], "vote");
    assert_eq!(actions[0]["action_input"], "Bob");
    assert_eq!(actions[0]["response_required"], false);

    // Aggregated fetch keys each collection by its own records' players.
    let (_, envelope) = send(&app, "GET", &format!("/all_players_info/{game_code}")).await;
    assert!(envelope["actions"][&alice].is_array());
    assert!(envelope["actions"][&bob].is_null());
    assert!(envelope["information"][&bob].is_array());
    assert!(envelope["information"][&alice].is_null());

    // Administrative wipe clears every action.
    let (status, envelope) = send(&app, "DELETE", "/actions/delete_all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope["deleted"], 1);
    let (_, envelope) = send(&app, "GET", &format!("/player_actions/{game_code}/{alice}")).await;
    assert!(envelope["actions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn game_partial_update_advances_turn_and_phase() {
    let app = app::create_app();
    let game_code = create_game(&app).await;

    let (status, envelope) = send_json(
        &app,
        "PUT",
        &format!("/games/{game_code}"),
        json!({"turn": 2, "time_of_day": "night"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope["game"]["turn"], 2);
    assert_eq!(envelope["game"]["time_of_day"], "night");
    // Fields omitted from the update keep their values.
    assert_eq!(envelope["game"]["player_count"], 7);
    assert_eq!(envelope["game"]["game_version"], "Trouble Brewing");
}

#[tokio::test]
async fn rejects_unknown_enum_values_at_the_boundary() {
    let app = app::create_app();

    let request = Request::builder()
        .method("POST")
        .uri("/games/")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"time_of_day": "twilight"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
