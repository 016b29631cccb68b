use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Elect,
    Vote,
    NightResponse,
    NightInfo,
}

/// Append-only record of a player-submitted action. `information_id` links
/// back to the information being responded to, 0 when standalone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Assigned by the store on append.
    pub action_id: u32,
    pub player_id: String,
    pub action_type: ActionType,
    pub action_input: String,
    pub turn: u32,
    pub response_required: bool,
    pub information_id: u32,
}

/// Append-only record of information delivered to a player. `action_id`
/// links back to the action being answered, 0 when standalone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InformationRecord {
    /// Assigned by the store on append.
    pub information_id: u32,
    pub player_id: String,
    pub turn: u32,
    pub information_type: String,
    pub information_input: String,
    pub response_required: bool,
    pub action_id: u32,
}

#[derive(Debug, Deserialize)]
pub struct ActionSend {
    pub player_id: String,
    pub action_type: ActionType,
    pub action_input: String,
    pub response_required: bool,
    pub turn: u32,
}

#[derive(Debug, Deserialize)]
pub struct InformationSend {
    pub player_id: String,
    pub information_type: String,
    pub information_input: String,
    pub response_required: bool,
    pub turn: u32,
}
