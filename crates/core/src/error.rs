//! Construction-time errors.
//!
//! Gameplay never fails: rejected moves and commands issued in the wrong
//! state are silent no-ops reported through `false` returns. Only building a
//! board, a game or a piece from bad input produces an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid board dimensions {width}x{height} (width must be 1..=32, height 1..=255)")]
    InvalidDimensions { width: i64, height: i64 },
    #[error("unknown shape kind: {0:?}")]
    UnknownShape(String),
}
