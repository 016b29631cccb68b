use serde::{Deserialize, Serialize};

use super::character::{CharacterAction, Designation};

#[derive(Debug, Deserialize)]
pub struct FirstNightRequest {
    pub game_code: String,
    pub game_version: String,
}

/// One player eligible to act on the first night: live player state merged
/// with the character's catalog entry and its first-night action.
#[derive(Clone, Debug, Serialize)]
pub struct FirstNightPlayer {
    pub player_id: String,
    pub player_name: String,
    pub character_id: u32,
    pub dead: bool,
    pub vote_token_remaining: bool,
    pub protected: Option<bool>,
    pub character_name: String,
    pub designation: Designation,
    pub first_night_order: u32,
    pub character_action_info: CharacterAction,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FirstNightInfo {
    pub player_id: String,
    pub character_id: u32,
    pub designation: Designation,
    pub first_night_order: u32,
    pub receives_information: bool,
    pub information_received: String,
    pub action: Option<String>,
    pub response_required: bool,
}

#[derive(Debug, Deserialize)]
pub struct NightInfoRequest {
    pub game_code: String,
    pub players: Vec<FirstNightInfo>,
}
