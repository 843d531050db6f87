//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal front end, audio or score collaborators).
//!
//! # Board Dimensions
//!
//! The reference playfield is 12 columns by 24 rows. Both are configurable at
//! construction time:
//!
//! - **Width**: 1..=32 columns (one `u32` occupancy word per row)
//! - **Height**: 1..=255 rows
//! - **Spawn position**: `(width / 2 - 2, -1)`, i.e. horizontally centered with the
//!   (always empty) top row of every shape layout sitting above the board
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep used by the terminal runner |
//! | `BASE_GRAVITY_MS` | 1000 | Gravity interval at level 1 |
//! | `GRAVITY_DECAY` | 0.85 | Interval multiplier per level |
//! | `GRAVITY_FLOOR_MS` | 120 | Fastest gravity interval |
//!
//! # Gravity Intervals by Level
//!
//! `interval = max(120, floor(1000 * 0.85^(level - 1)))`
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 850ms |
//! | 3 | 722ms |
//! | 5 | 522ms |
//! | 10 | 231ms |
//! | 14+ | 120ms floor |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameCommand, Rotation, ShapeKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::North.offset(-1), Rotation::West);
//!
//! assert_eq!(GameCommand::from_str("hardDrop"), Some(GameCommand::HardDrop));
//!
//! assert_eq!(DEFAULT_BOARD_WIDTH, 12);
//! assert_eq!(DEFAULT_BOARD_HEIGHT, 24);
//! ```

/// Default board width in cells (12 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 12;

/// Default board height in cells (24 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 24;

/// Widest supported board; each row is stored as one `u32`
pub const MAX_BOARD_WIDTH: u8 = 32;

/// Tallest supported board
pub const MAX_BOARD_HEIGHT: u8 = u8::MAX;

/// Vertical spawn coordinate of a new piece's bounding box
pub const SPAWN_Y: i32 = -1;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_GRAVITY_MS: u32 = 1000;

/// Per-level gravity interval multiplier
pub const GRAVITY_DECAY: f64 = 0.85;

/// Gravity interval floor (120ms)
pub const GRAVITY_FLOOR_MS: u32 = 120;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level of a fresh game
pub const STARTING_LEVEL: u32 = 1;

/// Points awarded per lock, indexed by the number of rows it cleared
///
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Number of entries kept by the high-score table
pub const HIGH_SCORE_SLOTS: usize = 5;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All kinds, in table order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse a kind from its single-letter name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("L"), Some(ShapeKind::L));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }

    /// Position of this kind in [`ShapeKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::S => 3,
            ShapeKind::Z => 4,
            ShapeKind::J => 5,
            ShapeKind::L => 6,
        }
    }
}

/// Rotation states, numbered 0..=3 clockwise from the spawn orientation
///
/// - **North** (0): spawn orientation
/// - **East** (1): rotated 90° clockwise
/// - **South** (2): rotated 180°
/// - **West** (3): rotated 270° clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index in `0..=3`
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for any integer index, taken modulo 4
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(0), Rotation::North);
    /// assert_eq!(Rotation::from_index(5), Rotation::East);
    /// assert_eq!(Rotation::from_index(-1), Rotation::West);
    /// ```
    pub fn from_index(index: i32) -> Self {
        match index.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotation reached after `delta` quarter turns clockwise (negative = counter-clockwise)
    pub fn offset(&self, delta: i32) -> Self {
        Self::from_index(self.index() as i32 + delta.rem_euclid(4))
    }

    pub fn rotate_cw(&self) -> Self {
        self.offset(1)
    }

    pub fn rotate_ccw(&self) -> Self {
        self.offset(-1)
    }
}

/// Commands accepted by the game state
///
/// These are produced by input collaborators (keyboard, tests, scripted bots).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; locks the piece when it cannot descend
    MoveDown,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Drop piece to its lowest valid position and lock it
    HardDrop,
    Pause,
    Resume,
    TogglePause,
    Mute,
    Unmute,
    ToggleMute,
    /// Reset board and counters and spawn a fresh piece
    NewGame,
}

impl GameCommand {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::from_str("togglemute"), Some(GameCommand::ToggleMute));
    /// assert_eq!(GameCommand::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "movedown" => Some(GameCommand::MoveDown),
            "rotatecw" => Some(GameCommand::RotateCw),
            "rotateccw" => Some(GameCommand::RotateCcw),
            "harddrop" => Some(GameCommand::HardDrop),
            "pause" => Some(GameCommand::Pause),
            "resume" => Some(GameCommand::Resume),
            "togglepause" => Some(GameCommand::TogglePause),
            "mute" => Some(GameCommand::Mute),
            "unmute" => Some(GameCommand::Unmute),
            "togglemute" => Some(GameCommand::ToggleMute),
            "newgame" => Some(GameCommand::NewGame),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::MoveDown => "moveDown",
            GameCommand::RotateCw => "rotateCw",
            GameCommand::RotateCcw => "rotateCcw",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::Pause => "pause",
            GameCommand::Resume => "resume",
            GameCommand::TogglePause => "togglePause",
            GameCommand::Mute => "mute",
            GameCommand::Unmute => "unmute",
            GameCommand::ToggleMute => "toggleMute",
            GameCommand::NewGame => "newGame",
        }
    }
}

/// Phase of the spawn → fall → lock → clear cycle
///
/// `Locking`, `LineClearing` and `Spawning` are passed through synchronously
/// inside a single command or tick; observers normally see `Falling` or
/// `GameOver` (or `Spawning` before the first piece).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    LineClearing,
    GameOver,
}

/// Outbound notification for rendering, audio and score collaborators.
///
/// Events are queued by the game state in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board and counters were reset (first start or new game)
    NewGame,
    /// A new piece entered the board
    Spawned { kind: ShapeKind },
    Moved { dx: i32, dy: i32 },
    Rotated { rotation: Rotation },
    /// Hard drop moved the piece `distance` rows (possibly 0) before locking
    HardDropped { distance: u32 },
    Locked { kind: ShapeKind },
    /// Rows removed by a lock, as indices before removal (ascending)
    LinesCleared { count: u32, rows: Vec<usize> },
    LevelChanged { level: u32 },
    ScoreChanged { score: u32 },
    GameOver { score: u32, lines: u32, level: u32 },
    Paused(bool),
    Muted(bool),
}
