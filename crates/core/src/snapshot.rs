use crate::pieces::{Piece, PieceCells};
use crate::types::{Phase, Rotation, ShapeKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x(),
            y: value.y(),
        }
    }
}

/// Read-only copy of everything a renderer needs.
///
/// Fill a reused snapshot with `GameState::snapshot_into` to avoid
/// reallocating the row buffer every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Locked cells, one occupancy word per row, top row first
    pub board: Vec<u32>,
    pub active: Option<ActiveSnapshot>,
    pub active_cells: PieceCells,
    pub ghost_cells: PieceCells,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
    pub muted: bool,
    pub phase: Phase,
    pub gravity_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = DEFAULT_BOARD_WIDTH;
        self.height = DEFAULT_BOARD_HEIGHT;
        self.board.clear();
        self.active = None;
        self.active_cells.clear();
        self.ghost_cells.clear();
        self.score = 0;
        self.lines = 0;
        self.level = 0;
        self.paused = false;
        self.game_over = false;
        self.muted = false;
        self.phase = Phase::Spawning;
        self.gravity_ms = 0;
    }

    /// Whether a locked block sits at (x, y)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width as i32 || y < 0 {
            return false;
        }
        self.board
            .get(y as usize)
            .is_some_and(|row| (row >> x) & 1 == 1)
    }

    pub fn is_active_cell(&self, x: i32, y: i32) -> bool {
        self.active_cells.contains(&(x, y))
    }

    pub fn is_ghost_cell(&self, x: i32, y: i32) -> bool {
        self.ghost_cells.contains(&(x, y))
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            board: Vec::new(),
            active: None,
            active_cells: PieceCells::new(),
            ghost_cells: PieceCells::new(),
            score: 0,
            lines: 0,
            level: 0,
            paused: false,
            game_over: false,
            muted: false,
            phase: Phase::Spawning,
            gravity_ms: 0,
        }
    }
}
