//! Runner configuration from environment variables and command-line arguments.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};

use crate::core::GameConfig;
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

pub const ENV_WIDTH: &str = "BLOCKFALL_WIDTH";
pub const ENV_HEIGHT: &str = "BLOCKFALL_HEIGHT";
pub const ENV_SEED: &str = "BLOCKFALL_SEED";

pub const USAGE: &str = "usage: blockfall [--width N] [--height N] [--seed N]";

/// Unvalidated runner settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub width: i64,
    pub height: i64,
    /// `None` seeds from the system clock
    pub seed: Option<u32>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH as i64,
            height: DEFAULT_BOARD_HEIGHT as i64,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Read settings from the environment. Missing or malformed values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with an injectable variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            width: lookup(ENV_WIDTH)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.width),
            height: lookup(ENV_HEIGHT)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.height),
            seed: lookup(ENV_SEED)
                .and_then(|v| v.trim().parse().ok())
                .or(defaults.seed),
        }
    }

    /// Override settings from `--width`, `--height` and `--seed` arguments.
    ///
    /// Returns `Ok(None)` when help was requested.
    pub fn apply_args(mut self, args: &[String]) -> Result<Option<Self>> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => return Ok(None),
                flag @ ("--width" | "--height" | "--seed") => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                    match flag {
                        "--width" => self.width = parse_number(flag, v)?,
                        "--height" => self.height = parse_number(flag, v)?,
                        _ => self.seed = Some(parse_number(flag, v)?),
                    }
                }
                other => return Err(anyhow!("unknown argument: {}\n{}", other, USAGE)),
            }
            i += 1;
        }
        Ok(Some(self))
    }

    /// Validate and build the game configuration
    pub fn game_config(&self) -> Result<GameConfig> {
        let seed = self.seed.unwrap_or_else(clock_seed);
        GameConfig::new(self.width, self.height, seed).context("invalid board configuration")
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, value))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
