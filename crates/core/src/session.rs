//! Session - serializes commands and clock ticks into one game state
//!
//! Every input goes through [`Session::dispatch`], one at a time, so a
//! command can never interleave with a gravity step. Events produced by the
//! game are forwarded to each registered [`EventSink`] in queue order after
//! the input has been fully applied.

use std::cell::RefCell;
use std::rc::Rc;

use crate::game_state::GameState;
use crate::types::{GameCommand, GameEvent};

/// Receiver for outbound game events (renderer, audio, score keeping).
///
/// Sinks observe only. They cannot fail the game: whatever a sink does with
/// an event stays inside the sink.
pub trait EventSink {
    fn handle(&mut self, event: &GameEvent);
}

/// Records every event it receives
impl EventSink for Vec<GameEvent> {
    fn handle(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Shared sink, so the owner can still read it while the session holds a handle
impl<T: EventSink> EventSink for Rc<RefCell<T>> {
    fn handle(&mut self, event: &GameEvent) {
        self.borrow_mut().handle(event);
    }
}

/// One input to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    Command(GameCommand),
    /// Elapsed wall-clock time in milliseconds
    Tick(u32),
}

/// A game plus the sinks that observe it
pub struct Session {
    state: GameState,
    sinks: Vec<Box<dyn EventSink>>,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            sinks: Vec::new(),
        }
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Start the game and deliver the opening events
    pub fn start(&mut self) {
        self.state.start();
        self.flush();
    }

    /// Apply one input and deliver the events it produced.
    ///
    /// Returns whether the input changed the game.
    pub fn dispatch(&mut self, input: SessionInput) -> bool {
        let changed = match input {
            SessionInput::Command(command) => self.state.apply_command(command),
            SessionInput::Tick(elapsed_ms) => self.state.tick(elapsed_ms),
        };
        self.flush();
        changed
    }

    fn flush(&mut self) {
        let events = self.state.take_events();
        for event in &events {
            for sink in &mut self.sinks {
                sink.handle(event);
            }
        }
    }

    pub fn into_state(self) -> GameState {
        self.state
    }
}
