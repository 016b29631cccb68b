use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Phase of the current turn. Unknown values are rejected at the JSON
/// boundary instead of being stored as free-form strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Day,
    Voting,
    Night,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    pub game_code: String,
    pub player_count: u32,
    pub game_version: String,
    pub ai_game_master: bool,
    pub turn: u32,
    pub time_of_day: TimeOfDay,
    pub created_date: DateTime<Utc>,
}

/// Create request. Every field is optional; defaults are applied by the
/// game service.
#[derive(Debug, Default, Deserialize)]
pub struct GameCreateRequest {
    pub player_count: Option<u32>,
    pub game_version: Option<String>,
    pub ai_game_master: Option<bool>,
    pub turn: Option<u32>,
    pub time_of_day: Option<TimeOfDay>,
}

/// Partial update. A missing field means "leave unchanged".
#[derive(Debug, Default, Deserialize)]
pub struct GameUpdate {
    pub player_count: Option<u32>,
    pub game_version: Option<String>,
    pub ai_game_master: Option<bool>,
    pub turn: Option<u32>,
    pub time_of_day: Option<TimeOfDay>,
}
