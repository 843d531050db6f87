//! Terminal input crate.
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`]. Holding a
//! key relies on the terminal's own key repeat; there is no repeat handling here.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
