//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management and simulation
//! logic. It has no dependencies on terminal I/O, which makes it:
//!
//! - **Deterministic**: the same seed and inputs produce the same game
//! - **Testable**: every rule runs headless in unit tests
//! - **Portable**: a renderer only needs a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`board`]: width x height occupancy grid, placement validation and line clearing
//! - [`pieces`]: the seven shapes as 4x4 masks with four rotation states each
//! - [`game_state`]: spawn, fall, lock, clear, pause and game over
//! - [`gravity`]: the single periodic gravity schedule
//! - [`scoring`]: line scores, levels and gravity intervals
//! - [`session`]: serialized input dispatch and event sinks
//! - [`highscores`]: in-memory best scores
//! - [`rng`]: seeded uniform shape selection
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState};
//! use blockfall_core::types::{GameCommand, GameEvent};
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345));
//! game.start();
//!
//! game.apply_command(GameCommand::MoveRight);
//! game.apply_command(GameCommand::RotateCw);
//! game.apply_command(GameCommand::HardDrop);
//!
//! let events = game.take_events();
//! assert_eq!(events[0], GameEvent::NewGame);
//! assert!(events.iter().any(|e| matches!(e, GameEvent::Locked { .. })));
//! assert!(game.board().occupied_count() > 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`] with the elapsed milliseconds every frame. Gravity
//! steps once per interval: 1000ms at level 1, multiplied by 0.85 per level,
//! never faster than 120ms.

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod gravity;
pub mod highscores;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineClear};
pub use config::GameConfig;
pub use error::ConfigError;
pub use game_state::GameState;
pub use gravity::GravityTimer;
pub use highscores::{HighScoreEntry, HighScores};
pub use pieces::{Piece, PieceCells, ShapeMask};
pub use rng::SimpleRng;
pub use scoring::{calculate_level, calculate_line_score, gravity_interval_ms};
pub use session::{EventSink, Session, SessionInput};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
