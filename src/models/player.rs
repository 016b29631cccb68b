use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::character::Designation;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub player_id: String,
    pub game_code: String,
    pub player_name: String,
    /// 0 means no character has been assigned yet.
    pub character_id: u32,
    pub dead: bool,
    pub vote_token_remaining: bool,
    pub protected: Option<bool>,
    pub creation_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerCreateRequest {
    pub game_code: String,
    pub player_name: String,
}

/// Partial update. A missing field means "leave unchanged".
#[derive(Debug, Default, Deserialize)]
pub struct PlayerUpdate {
    pub player_name: Option<String>,
    pub character_id: Option<u32>,
    pub dead: Option<bool>,
    pub vote_token_remaining: Option<bool>,
    pub protected: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CharacterAssignment {
    pub player_id: String,
    pub character_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct BatchAssignRequest {
    pub players: Vec<CharacterAssignment>,
}

/// Player view enriched with the parent game's turn and, once a character
/// is assigned, the catalog detail for it.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerDetail {
    pub player_id: String,
    pub player_name: String,
    pub game_code: String,
    pub turn: u32,
    pub character_id: u32,
    pub vote_token_remaining: bool,
    pub creation_date: DateTime<Utc>,
    pub dead: bool,
    pub protected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<CharacterSummary>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CharacterSummary {
    pub character_id: u32,
    pub character_name: String,
    pub designation: Designation,
    pub character_description: String,
}
