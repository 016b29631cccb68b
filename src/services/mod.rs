pub mod game_service;
pub mod ledger_service;
pub mod night_service;
pub mod player_service;
