//! Game configuration.

use crate::error::ConfigError;
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH};

/// Validated construction parameters for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    width: u8,
    height: u8,
    /// Seed for shape selection
    pub seed: u32,
}

impl GameConfig {
    /// Validate board dimensions.
    ///
    /// Width must be in `1..=32` and height in `1..=255`; anything else,
    /// including zero or negative values, is rejected.
    pub fn new(width: i64, height: i64, seed: u32) -> Result<Self, ConfigError> {
        let valid_width = (1..=MAX_BOARD_WIDTH as i64).contains(&width);
        let valid_height = (1..=MAX_BOARD_HEIGHT as i64).contains(&height);
        if !valid_width || !valid_height {
            return Err(ConfigError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width: width as u8,
            height: height as u8,
            seed,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: 1,
        }
    }
}
