pub mod character;
pub mod game;
pub mod ledger;
pub mod night;
pub mod player;
