//! Terminal bell as the audio collaborator.
//!
//! Rings on line clears and game over unless muted. Write failures are
//! swallowed: a broken bell never interrupts the game.

use std::io::{self, Write};

use crate::core::EventSink;
use crate::types::GameEvent;

const BEL: &[u8] = b"\x07";

pub struct BellSink<W: Write = io::Stdout> {
    out: W,
    muted: bool,
    rung: u32,
}

impl BellSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BellSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            muted: false,
            rung: 0,
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Number of times the bell rang
    pub fn rung(&self) -> u32 {
        self.rung
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn ring(&mut self) {
        if self.muted {
            return;
        }
        if self.out.write_all(BEL).and_then(|_| self.out.flush()).is_ok() {
            self.rung += 1;
        }
    }
}

impl<W: Write> EventSink for BellSink<W> {
    fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Muted(muted) => self.muted = *muted,
            GameEvent::LinesCleared { .. } | GameEvent::GameOver { .. } => self.ring(),
            _ => {}
        }
    }
}
