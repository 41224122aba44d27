use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a [`GameConfig`] can be rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least {min_width}x1 to fit the starting snake, got {width}x{height}")]
    GridTooSmall {
        width: usize,
        height: usize,
        min_width: usize,
    },
    #[error("grid {width}x{height} exceeds the {max_side} cell limit per side")]
    GridTooLarge {
        width: usize,
        height: usize,
        max_side: usize,
    },
    #[error("initial snake length must be at least 1")]
    EmptySnake,
    #[error("minimum speed must be greater than zero")]
    ZeroMinSpeed,
    #[error("minimum speed {min_ms}ms exceeds initial speed {initial_ms}ms")]
    MinAboveInitial { min_ms: u64, initial_ms: u64 },
    #[error("speed decay must be in (0, 1], got {0}")]
    InvalidDecay(f64),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Largest accepted grid side, in cells
pub const MAX_GRID_SIDE: usize = 1024;

/// Configuration for the game
///
/// Fixed at process start. Fields missing from a config file fall back to
/// [`GameConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Tick interval at the start of a game, in milliseconds
    pub initial_speed_ms: u64,
    /// Floor for the tick interval, in milliseconds
    pub min_speed_ms: u64,
    /// Multiplier applied to the tick interval each time food is eaten
    pub speed_decay: f64,
    /// Points awarded per food
    pub score_per_food: u32,
    /// Terminal columns used to draw one grid cell (render-only)
    pub cell_width: u16,
    /// Seed for food placement; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 30,
            grid_height: 20,
            initial_snake_length: 3,
            initial_speed_ms: 120,
            min_speed_ms: 30,
            speed_decay: 0.95,
            score_per_food: 10,
            cell_width: 2,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a YAML document on top of the defaults
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Check that a game can be started with this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_snake_length == 0 {
            return Err(ConfigError::EmptySnake);
        }

        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max_side: MAX_GRID_SIDE,
            });
        }

        // The snake starts centered with its tail at width/2 - (len - 1).
        if self.grid_height == 0
            || self.grid_width == 0
            || self.initial_snake_length - 1 > self.grid_width / 2
        {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
                min_width: (self.initial_snake_length - 1).saturating_mul(2).max(1),
            });
        }

        if self.min_speed_ms == 0 {
            return Err(ConfigError::ZeroMinSpeed);
        }
        if self.min_speed_ms > self.initial_speed_ms {
            return Err(ConfigError::MinAboveInitial {
                min_ms: self.min_speed_ms,
                initial_ms: self.initial_speed_ms,
            });
        }
        if !(self.speed_decay > 0.0 && self.speed_decay <= 1.0) {
            return Err(ConfigError::InvalidDecay(self.speed_decay));
        }

        Ok(())
    }
}
