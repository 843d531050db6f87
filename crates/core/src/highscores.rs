//! In-memory high score table, fed by `GameOver` events

use crate::session::EventSink;
use crate::types::{GameEvent, HIGH_SCORE_SLOTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
}

/// Best scores, highest first. Equal scores keep arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScores {
    entries: Vec<HighScoreEntry>,
    capacity: usize,
}

impl HighScores {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert an entry. Returns its rank (0 is best) if it made the table.
    pub fn add(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|e| e.score < entry.score)
            .unwrap_or(self.entries.len());
        if rank >= self.capacity {
            return None;
        }
        self.entries.insert(rank, entry);
        self.entries.truncate(self.capacity);
        Some(rank)
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new(HIGH_SCORE_SLOTS)
    }
}

impl EventSink for HighScores {
    fn handle(&mut self, event: &GameEvent) {
        if let GameEvent::GameOver {
            score,
            lines,
            level,
        } = *event
        {
            self.add(HighScoreEntry {
                score,
                lines,
                level,
            });
        }
    }
}
