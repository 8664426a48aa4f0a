use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::game::board::Coord;
use crate::game::direction::Direction;

/// The classic starting head position; the body trails to the left
pub const START_HEAD: Coord = Coord { row: 4, col: 10 };
/// Direction the snake faces at game start
pub const START_DIRECTION: Direction = Direction::Right;

/// Configuration for one game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Initial length of the snake
    pub initial_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { initial_length: 3 }
    }
}

impl GameConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the board cannot host. The start body
    /// trails left from column 10, so it must fit between the head and
    /// the left border.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.initial_length >= 3,
            "initial_length must be at least 3, got {}",
            self.initial_length
        );
        ensure!(
            self.initial_length as i32 <= START_HEAD.col,
            "initial_length {} does not fit on the board",
            self.initial_length
        );
        Ok(())
    }
}
