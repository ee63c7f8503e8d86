//! Game configuration.
//!
//! A game can be configured from a JSON file. Every field is optional and
//! falls back to the classic five-territory game with the player on "Azul".

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{RegistryError, Territory, TERRITORY_COUNT};
use crate::mission::MissionRules;

/// Color the player controls unless configured otherwise.
pub const DEFAULT_PLAYER_COLOR: &str = "Azul";

/// Errors raised while loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Initial data for one territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritorySetup {
    pub name: String,
    pub color: String,
    pub troops: i32,
}

impl TerritorySetup {
    pub fn to_territory(&self) -> Result<Territory, RegistryError> {
        Territory::new(&self.name, &self.color, self.troops)
    }
}

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of territories on the map.
    pub territory_count: usize,
    pub player_color: String,
    pub rules: MissionRules,
    /// Seed for dice and mission draws; entropy when absent.
    pub seed: Option<u64>,
    /// Preset territories. When empty they are read during setup instead.
    pub territories: Vec<TerritorySetup>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            territory_count: TERRITORY_COUNT,
            player_color: DEFAULT_PLAYER_COLOR.to_string(),
            rules: MissionRules::default(),
            seed: None,
            territories: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Loads and validates a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings are consistent with each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.territory_count == 0 {
            return Err(ConfigError::Invalid(
                "territory_count must be at least 1".to_string(),
            ));
        }
        if self.player_color.trim().is_empty() {
            return Err(ConfigError::Invalid("player_color must not be empty".to_string()));
        }
        if self.rules.target_faction.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "rules.target_faction must not be empty".to_string(),
            ));
        }
        if self.rules.territory_goal == 0 {
            return Err(ConfigError::Invalid(
                "rules.territory_goal must be at least 1".to_string(),
            ));
        }
        if self.rules.territory_goal > self.territory_count {
            return Err(ConfigError::Invalid(format!(
                "rules.territory_goal {} exceeds territory_count {}",
                self.rules.territory_goal, self.territory_count
            )));
        }
        if !self.territories.is_empty() && self.territories.len() != self.territory_count {
            return Err(ConfigError::Invalid(format!(
                "expected {} preset territories, got {}",
                self.territory_count,
                self.territories.len()
            )));
        }
        Ok(())
    }
}
