use chrono::Utc;
use rand::Rng;

use crate::error::ServiceError;
use crate::models::game::{Game, GameCreateRequest, GameUpdate, TimeOfDay};
use crate::state::AppState;

const CODE_LEN: usize = 6;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub fn generate_game_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Creates a game under a fresh code. The store rejects duplicate codes,
/// so on a collision we just roll a new one and try again.
pub async fn create_game(state: &AppState, req: GameCreateRequest) -> Result<String, ServiceError> {
    let created_date = Utc::now();
    loop {
        let game_code = generate_game_code();
        let game = Game {
            game_code: game_code.clone(),
            player_count: req.player_count.unwrap_or(0),
            game_version: req
                .game_version
                .clone()
                .unwrap_or_else(|| "trouble_brewing".to_string()),
            ai_game_master: req.ai_game_master.unwrap_or(false),
            turn: req.turn.unwrap_or(1),
            time_of_day: req.time_of_day.unwrap_or(TimeOfDay::Day),
            created_date,
        };
        match state.store.insert_game(game).await {
            Ok(()) => {
                log::info!("created game {game_code}");
                return Ok(game_code);
            }
            Err(ServiceError::ValidationConflict(_)) => continue,
            Err(e) => return Err(e),
        }
    }
}

pub async fn get_game(state: &AppState, game_code: &str) -> Result<Game, ServiceError> {
    state.store.get_game(game_code).await
}

pub async fn list_games(state: &AppState) -> Vec<Game> {
    state.store.list_games().await
}

pub async fn update_game(
    state: &AppState,
    game_code: &str,
    update: GameUpdate,
) -> Result<Game, ServiceError> {
    state.store.update_game(game_code, update).await
}
