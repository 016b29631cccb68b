use crate::state::AppState;
use axum::Router;

mod catalog;
mod game;
mod ledger;
mod night;
mod player;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .merge(game::routes(state.clone()))
        .merge(player::routes(state.clone()))
        .merge(catalog::routes(state.clone()))
        .merge(night::routes(state.clone()))
        .merge(ledger::routes(state))
}
