//! Terminal front end.
//!
//! A small game-oriented rendering layer: [`BoardView`] lays a snapshot out
//! into a [`Frame`] (pure, testable) and [`TerminalRenderer`] flushes frames
//! to the terminal with crossterm. [`BellSink`] is the audio collaborator.

pub mod bell;
pub mod frame;
pub mod renderer;
pub mod view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use bell::BellSink;
pub use frame::{Frame, Glyph, Tint};
pub use renderer::{changed_rows, encode_changed_rows_into, encode_full_into, TerminalRenderer};
pub use view::{BoardView, Viewport};
