use serde::{Deserialize, Serialize};

use super::game::TimeOfDay;

/// Alignment tag. "imp" covers the demon's minions in the source data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Designation {
    Demon,
    Imp,
    Villager,
    Outsider,
}

/// Static rule data for one character, loaded from the catalog files.
/// `first_night_order` gates first-night eligibility; `night_order` ranks
/// the character on every later night.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Character {
    pub character_id: u32,
    pub character_name: String,
    pub designation: Designation,
    pub game_version: String,
    pub character_description: String,
    pub power_usage_count: u32,
    pub power_usage_count_max: u32,
    pub first_day_order: Option<u32>,
    pub first_night_order: Option<u32>,
    pub night_order: Option<u32>,
}

/// Static rule data for one character's night behavior. The wire keys keep
/// the catalog files' historical spellings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CharacterAction {
    pub character_action_id: u32,
    pub character_id: u32,
    pub time_of_day: TimeOfDay,
    #[serde(rename = "recieve_information")]
    pub receive_information: bool,
    #[serde(rename = "information_recieved")]
    pub information_received: String,
    pub first_night: bool,
    pub make_action: bool,
    pub action: String,
    pub response_required: bool,
}

#[derive(Debug, Deserialize)]
pub struct CharacterCreateRequest {
    pub character_name: String,
    pub designation: Designation,
    pub game_version: String,
    pub character_description: String,
    pub power_usage_count: u32,
    pub power_usage_count_max: u32,
    pub first_day_order: Option<u32>,
    pub first_night_order: Option<u32>,
    pub night_order: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CharacterActionCreateRequest {
    pub character_id: u32,
    pub time_of_day: TimeOfDay,
    #[serde(rename = "recieve_information")]
    pub receive_information: bool,
    #[serde(rename = "information_recieved")]
    pub information_received: String,
    pub first_night: bool,
    pub make_action: bool,
    pub action: String,
    pub response_required: bool,
}
