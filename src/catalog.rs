use std::env;
use std::path::PathBuf;

use crate::error::ServiceError;
use crate::models::character::{Character, CharacterAction};

/// Version-keyed rule catalog, read from JSON files under the game files
/// directory (`game_files/<version>/characters.json` and
/// `characteractions.json`). Immutable reference data; gameplay never
/// writes here.
#[derive(Clone, Debug)]
pub struct Catalog {
    base_dir: PathBuf,
}

/// Maps the free-form version names clients send to a catalog directory.
/// Unrecognized versions fail fast instead of surfacing a path error later.
pub fn canonical_version(version: &str) -> Result<&'static str, ServiceError> {
    match version {
        "Trouble Brewing" | "trouble_brewing" => Ok("trouble_brewing"),
        other => Err(ServiceError::CatalogMissing(other.to_string())),
    }
}

impl Catalog {
    pub fn from_env() -> Self {
        let base_dir = env::var("GAME_FILES_DIR").unwrap_or_else(|_| "game_files".to_string());
        Self {
            base_dir: PathBuf::from(base_dir),
        }
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub async fn load_characters(&self, version: &str) -> Result<Vec<Character>, ServiceError> {
        self.load_table(version, "characters.json").await
    }

    pub async fn load_character_actions(
        &self,
        version: &str,
    ) -> Result<Vec<CharacterAction>, ServiceError> {
        self.load_table(version, "characteractions.json").await
    }

    /// Characters whose `game_version` matches the (canonicalized) version.
    /// An empty result is reported as not-found, matching the list endpoint.
    pub async fn characters_for_version(
        &self,
        version: &str,
    ) -> Result<Vec<Character>, ServiceError> {
        let canonical = canonical_version(version)?;
        let characters = self.load_characters(version).await?;
        let filtered: Vec<Character> = characters
            .into_iter()
            .filter(|c| c.game_version == canonical)
            .collect();
        if filtered.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "characters for game version {version}"
            )));
        }
        Ok(filtered)
    }

    pub async fn first_night_actions(
        &self,
        version: &str,
    ) -> Result<Vec<CharacterAction>, ServiceError> {
        let mut actions = self.load_character_actions(version).await?;
        actions.retain(|a| a.first_night);
        Ok(actions)
    }

    async fn load_table<T: serde::de::DeserializeOwned>(
        &self,
        version: &str,
        file_name: &str,
    ) -> Result<Vec<T>, ServiceError> {
        let canonical = canonical_version(version)?;
        let path = self.base_dir.join(canonical).join(file_name);
        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            log::warn!("failed to read {}: {}", path.display(), e);
            ServiceError::CatalogMissing(version.to_string())
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            log::warn!("failed to parse {}: {}", path.display(), e);
            ServiceError::CatalogMissing(version.to_string())
        })
    }
}
