use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::Mutex;

use crate::error::ServiceError;
use crate::models::character::{Character, CharacterAction};
use crate::models::game::{Game, GameUpdate};
use crate::models::ledger::{ActionRecord, InformationRecord};
use crate::models::player::{Player, PlayerUpdate};

#[derive(Default)]
struct Tables {
    games: HashMap<String, Game>,
    players: HashMap<String, Player>,
    actions: Vec<ActionRecord>,
    information: Vec<InformationRecord>,
    characters: Vec<Character>,
    character_actions: Vec<CharacterAction>,
    next_action_id: u32,
    next_information_id: u32,
    next_character_id: u32,
    next_character_action_id: u32,
}

/// Persistence layer. Each method takes the table lock once, so an
/// operation either applies fully or not at all; the store is the final
/// arbiter of game-code uniqueness and referential integrity.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<Tables>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_game(&self, game: Game) -> Result<(), ServiceError> {
        let mut tables = self.inner.lock().await;
        if tables.games.contains_key(&game.game_code) {
            return Err(ServiceError::ValidationConflict(format!(
                "game code {} already exists",
                game.game_code
            )));
        }
        tables.games.insert(game.game_code.clone(), game);
        Ok(())
    }

    pub async fn get_game(&self, game_code: &str) -> Result<Game, ServiceError> {
        let tables = self.inner.lock().await;
        tables
            .games
            .get(game_code)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("game {game_code}")))
    }

    pub async fn list_games(&self) -> Vec<Game> {
        let tables = self.inner.lock().await;
        let mut games: Vec<Game> = tables.games.values().cloned().collect();
        games.sort_by(|a, b| a.created_date.cmp(&b.created_date));
        games
    }

    pub async fn update_game(
        &self,
        game_code: &str,
        update: GameUpdate,
    ) -> Result<Game, ServiceError> {
        let mut tables = self.inner.lock().await;
        let game = tables
            .games
            .get_mut(game_code)
            .ok_or_else(|| ServiceError::NotFound(format!("game {game_code}")))?;
        if let Some(player_count) = update.player_count {
            game.player_count = player_count;
        }
        if let Some(game_version) = update.game_version {
            game.game_version = game_version;
        }
        if let Some(ai_game_master) = update.ai_game_master {
            game.ai_game_master = ai_game_master;
        }
        if let Some(turn) = update.turn {
            game.turn = turn;
        }
        if let Some(time_of_day) = update.time_of_day {
            game.time_of_day = time_of_day;
        }
        Ok(game.clone())
    }

    /// Inserts a player with a store-generated id. The id is drawn from the
    /// 10-digit space and regenerated under the lock until unused, so there
    /// is no window between the uniqueness check and the insert.
    pub async fn insert_player(&self, mut player: Player) -> Result<Player, ServiceError> {
        let mut tables = self.inner.lock().await;
        if !tables.games.contains_key(&player.game_code) {
            return Err(ServiceError::ValidationConflict(format!(
                "game {} does not exist",
                player.game_code
            )));
        }
        let mut rng = rand::thread_rng();
        let player_id = loop {
            let candidate = rng.gen_range(1_000_000_000u64..10_000_000_000).to_string();
            if !tables.players.contains_key(&candidate) {
                break candidate;
            }
        };
        player.player_id = player_id.clone();
        tables.players.insert(player_id.clone(), player);
        Ok(tables.players[&player_id].clone())
    }

    pub async fn get_player(&self, player_id: &str) -> Result<Player, ServiceError> {
        let tables = self.inner.lock().await;
        tables
            .players
            .get(player_id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("player {player_id}")))
    }

    pub async fn players_by_game(&self, game_code: &str) -> Vec<Player> {
        let tables = self.inner.lock().await;
        let mut players: Vec<Player> = tables
            .players
            .values()
            .filter(|p| p.game_code == game_code)
            .cloned()
            .collect();
        players.sort_by(|a, b| {
            a.creation_date
                .cmp(&b.creation_date)
                .then_with(|| a.player_id.cmp(&b.player_id))
        });
        players
    }

    pub async fn update_player(
        &self,
        player_id: &str,
        update: PlayerUpdate,
    ) -> Result<Player, ServiceError> {
        let mut tables = self.inner.lock().await;
        let player = tables
            .players
            .get_mut(player_id)
            .ok_or_else(|| ServiceError::NotFound(format!("player {player_id}")))?;
        if let Some(player_name) = update.player_name {
            player.player_name = player_name;
        }
        if let Some(character_id) = update.character_id {
            player.character_id = character_id;
        }
        if let Some(dead) = update.dead {
            player.dead = dead;
        }
        if let Some(vote_token_remaining) = update.vote_token_remaining {
            player.vote_token_remaining = vote_token_remaining;
        }
        if let Some(protected) = update.protected {
            player.protected = Some(protected);
        }
        Ok(player.clone())
    }

    /// Appends a single action. `action_id` is assigned from the store's
    /// counter; the player must exist.
    pub async fn append_action(&self, record: ActionRecord) -> Result<ActionRecord, ServiceError> {
        let mut tables = self.inner.lock().await;
        if !tables.players.contains_key(&record.player_id) {
            return Err(ServiceError::ValidationConflict(format!(
                "player {} does not exist",
                record.player_id
            )));
        }
        Ok(push_action(&mut tables, record))
    }

    /// Atomic batch append: every entry is validated before any is written,
    /// so a bad entry leaves the ledger untouched.
    pub async fn append_actions_batch(
        &self,
        records: Vec<ActionRecord>,
    ) -> Result<usize, ServiceError> {
        let mut tables = self.inner.lock().await;
        for record in &records {
            if !tables.players.contains_key(&record.player_id) {
                return Err(ServiceError::ValidationConflict(format!(
                    "player {} does not exist",
                    record.player_id
                )));
            }
        }
        let count = records.len();
        for record in records {
            push_action(&mut tables, record);
        }
        Ok(count)
    }

    pub async fn append_information(
        &self,
        mut record: InformationRecord,
    ) -> Result<InformationRecord, ServiceError> {
        let mut tables = self.inner.lock().await;
        if !tables.players.contains_key(&record.player_id) {
            return Err(ServiceError::ValidationConflict(format!(
                "player {} does not exist",
                record.player_id
            )));
        }
        tables.next_information_id += 1;
        record.information_id = tables.next_information_id;
        tables.information.push(record.clone());
        Ok(record)
    }

    pub async fn actions_for(&self, player_id: &str, turn: u32) -> Vec<ActionRecord> {
        let tables = self.inner.lock().await;
        tables
            .actions
            .iter()
            .filter(|a| a.player_id == player_id && a.turn == turn)
            .cloned()
            .collect()
    }

    pub async fn information_for(&self, player_id: &str, turn: u32) -> Vec<InformationRecord> {
        let tables = self.inner.lock().await;
        tables
            .information
            .iter()
            .filter(|i| i.player_id == player_id && i.turn == turn)
            .cloned()
            .collect()
    }

    pub async fn actions_at_turn(&self, turn: u32) -> Vec<ActionRecord> {
        let tables = self.inner.lock().await;
        tables
            .actions
            .iter()
            .filter(|a| a.turn == turn)
            .cloned()
            .collect()
    }

    pub async fn information_at_turn(&self, turn: u32) -> Vec<InformationRecord> {
        let tables = self.inner.lock().await;
        tables
            .information
            .iter()
            .filter(|i| i.turn == turn)
            .cloned()
            .collect()
    }

    /// Clears the whole action ledger. Administrative, not game-scoped.
    pub async fn clear_actions(&self) -> usize {
        let mut tables = self.inner.lock().await;
        let count = tables.actions.len();
        tables.actions.clear();
        count
    }

    pub async fn insert_character(&self, mut character: Character) -> Character {
        let mut tables = self.inner.lock().await;
        tables.next_character_id += 1;
        character.character_id = tables.next_character_id;
        tables.characters.push(character.clone());
        character
    }

    pub async fn insert_character_action(
        &self,
        mut action: CharacterAction,
    ) -> CharacterAction {
        let mut tables = self.inner.lock().await;
        tables.next_character_action_id += 1;
        action.character_action_id = tables.next_character_action_id;
        tables.character_actions.push(action.clone());
        action
    }
}

fn push_action(tables: &mut Tables, mut record: ActionRecord) -> ActionRecord {
    tables.next_action_id += 1;
    record.action_id = tables.next_action_id;
    tables.actions.push(record.clone());
    record
}
