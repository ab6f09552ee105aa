//! Game configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fewest players a game can seat
pub const MIN_PLAYERS: u8 = 2;

/// Most players a game can seat
pub const MAX_PLAYERS: u8 = 8;

/// Players seated when nothing else is configured
pub const DEFAULT_PLAYERS: u8 = 5;

/// Errors from building a game
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("player count must be between 2 and 8, got {0}")]
    PlayerCount(u8),

    #[error("board must hold every camel exactly once")]
    IncompleteBoard,
}

/// Settings fixed at game creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats
    pub player_count: u8,
    /// RNG seed. Drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Config for `player_count` players with a fixed seed
    pub fn seeded(player_count: u8, seed: u64) -> Self {
        Self {
            player_count,
            seed: Some(seed),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYERS,
            seed: None,
        }
    }
}
