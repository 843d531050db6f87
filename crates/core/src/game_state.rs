//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, RNG, scoring
//! and the gravity schedule. It runs the spawn → fall → lock → clear → spawn
//! cycle, pause and game-over, and queues events for collaborators.
//!
//! Every movement, rotation and spawn is validated with [`Board::can_place`]
//! before anything is mutated. Requests that fail validation, or that arrive
//! while paused or after game over, are silent no-ops that return `false`.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::gravity::GravityTimer;
use crate::pieces::{Piece, PieceCells};
use crate::rng::SimpleRng;
use crate::scoring::{calculate_level, calculate_line_score, gravity_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Absent before the first spawn, during a lock, and after game over
    active: Option<Piece>,
    rng: SimpleRng,
    gravity: GravityTimer,
    phase: Phase,
    /// Pending outbound events, oldest first
    events: Vec<GameEvent>,
    score: u32,
    lines: u32,
    level: u32,
    paused: bool,
    game_over: bool,
    muted: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with an empty board. Call [`GameState::start`] to spawn the first piece.
    pub fn new(config: GameConfig) -> Self {
        Self::with_board(Board::with_config(&config), config.seed)
    }

    /// Create a new game after validating the board dimensions
    pub fn with_dimensions(width: i64, height: i64, seed: u32) -> Result<Self, ConfigError> {
        GameConfig::new(width, height, seed).map(Self::new)
    }

    /// Create a game on a prepared board (its dimensions become the game's)
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            active: None,
            rng: SimpleRng::new(seed),
            gravity: GravityTimer::new(gravity_interval_ms(STARTING_LEVEL)),
            phase: Phase::Spawning,
            events: Vec::new(),
            score: 0,
            lines: 0,
            level: STARTING_LEVEL,
            paused: false,
            game_over: false,
            muted: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.events.push(GameEvent::NewGame);
        if self.spawn_piece() {
            self.gravity.restart(gravity_interval_ms(self.level));
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only view of the locked cells
    pub fn board_occupancy(&self) -> &Board {
        &self.board
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    /// Current gravity interval for this level
    pub fn gravity_interval_ms(&self) -> u32 {
        gravity_interval_ms(self.level)
    }

    /// Whether movement, rotation, drops and gravity currently apply
    pub fn is_playable(&self) -> bool {
        self.started && !self.paused && !self.game_over && self.active.is_some()
    }

    /// Cells of the active piece
    pub fn current_piece_cells(&self) -> Option<PieceCells> {
        self.active.map(|piece| piece.cells())
    }

    /// How far the active piece can fall before it rests
    pub fn drop_distance(&self) -> Option<i32> {
        let active = self.active?;
        let mut dy = 0;
        while self.board.can_place(&active, 0, dy + 1, 0) {
            dy += 1;
        }
        Some(dy)
    }

    /// Cells of the active piece translated to where a hard drop would put it
    pub fn current_ghost_cells(&self) -> Option<PieceCells> {
        let active = self.active?;
        let dy = self.drop_distance()?;
        Some(active.cells_with(0, dy, 0))
    }

    /// Take all events queued since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events queued since the last [`GameState::take_events`]
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.rows());
        out.active = self.active.map(ActiveSnapshot::from);
        out.active_cells = self.current_piece_cells().unwrap_or_default();
        out.ghost_cells = self.current_ghost_cells().unwrap_or_default();
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.muted = self.muted;
        out.phase = self.phase;
        out.gravity_ms = self.gravity_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a new random piece at the spawn position.
    ///
    /// Ends the game when the piece does not fit.
    fn spawn_piece(&mut self) -> bool {
        self.phase = Phase::Spawning;
        let piece = Piece::random(&mut self.rng, self.board.width());

        if !self.board.can_place(&piece, 0, 0, 0) {
            self.active = None;
            self.game_over = true;
            self.phase = Phase::GameOver;
            self.gravity.stop();
            self.events.push(GameEvent::GameOver {
                score: self.score,
                lines: self.lines,
                level: self.level,
            });
            return false;
        }

        self.active = Some(piece);
        self.phase = Phase::Falling;
        self.events.push(GameEvent::Spawned { kind: piece.kind() });
        true
    }

    /// Try to move the active piece.
    ///
    /// A rejected straight-down move locks the piece instead, but only when
    /// the piece cannot descend even one row.
    pub fn request_move(&mut self, dx: i32, dy: i32) -> bool {
        if !self.is_playable() || (dx == 0 && dy == 0) {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.board.can_place(&active, dx, dy, 0) {
            self.active = Some(active.translated(dx, dy));
            self.events.push(GameEvent::Moved { dx, dy });
            return true;
        }

        if dx == 0 && dy > 0 && !self.board.can_place(&active, 0, 1, 0) {
            self.lock_piece();
            return true;
        }

        false
    }

    /// Try to rotate the active piece by one quarter turn (`delta` is +1 or -1)
    pub fn request_rotate(&mut self, delta: i32) -> bool {
        if delta != 1 && delta != -1 {
            return false;
        }
        if !self.is_playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if !self.board.can_place(&active, 0, 0, delta) {
            return false;
        }

        let rotated = active.rotated(delta);
        self.active = Some(rotated);
        self.events.push(GameEvent::Rotated {
            rotation: rotated.rotation(),
        });
        true
    }

    /// Hard drop the active piece to the bottom and lock it
    pub fn request_hard_drop(&mut self) -> bool {
        if !self.is_playable() {
            return false;
        }
        let (Some(active), Some(distance)) = (self.active, self.drop_distance()) else {
            return false;
        };

        if distance > 0 {
            self.active = Some(active.translated(0, distance));
        }
        self.events.push(GameEvent::HardDropped {
            distance: distance as u32,
        });

        // Resting pieces (distance 0) lock as well
        self.lock_piece();
        true
    }

    pub fn request_pause(&mut self) -> bool {
        if !self.started || self.game_over || self.paused {
            return false;
        }
        self.paused = true;
        self.gravity.stop();
        self.events.push(GameEvent::Paused(true));
        true
    }

    pub fn request_resume(&mut self) -> bool {
        if !self.paused || self.game_over {
            return false;
        }
        self.paused = false;
        self.gravity.restart(gravity_interval_ms(self.level));
        self.events.push(GameEvent::Paused(false));
        true
    }

    pub fn request_mute(&mut self) -> bool {
        if self.muted {
            return false;
        }
        self.muted = true;
        self.events.push(GameEvent::Muted(true));
        true
    }

    pub fn request_unmute(&mut self) -> bool {
        if !self.muted {
            return false;
        }
        self.muted = false;
        self.events.push(GameEvent::Muted(false));
        true
    }

    /// Reset board, score, lines and level, then spawn a fresh piece.
    ///
    /// Accepted in every state. Mute and the RNG stream carry over.
    pub fn request_new_game(&mut self) -> bool {
        // Cancel the old schedule before arming a new one
        self.gravity.stop();

        self.board.reset();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.level = STARTING_LEVEL;
        self.paused = false;
        self.game_over = false;
        self.started = true;
        self.events.push(GameEvent::NewGame);

        if self.spawn_piece() {
            self.gravity.restart(gravity_interval_ms(self.level));
        }
        true
    }

    /// Lock the active piece onto the board, clear rows, update counters and spawn the next piece
    fn lock_piece(&mut self) {
        // No current piece exists from here until the next spawn
        let Some(piece) = self.active.take() else {
            return;
        };

        self.phase = Phase::Locking;
        self.board.merge(&piece);
        self.events.push(GameEvent::Locked { kind: piece.kind() });

        let cleared = self.board.clear_full_lines();
        if cleared.count > 0 {
            self.phase = Phase::LineClearing;
            let count = cleared.count;
            self.events.push(GameEvent::LinesCleared {
                count,
                rows: cleared.rows,
            });

            self.score = self.score.saturating_add(calculate_line_score(count));
            self.events.push(GameEvent::ScoreChanged { score: self.score });

            self.lines = self.lines.saturating_add(count);
            let level = calculate_level(self.lines);
            if level != self.level {
                self.level = level;
                self.events.push(GameEvent::LevelChanged { level });
                self.gravity.restart(gravity_interval_ms(level));
            }
        }

        self.spawn_piece();
    }

    /// One gravity step: move down, or lock when blocked
    fn gravity_step(&mut self) -> bool {
        self.request_move(0, 1)
    }

    /// Advance the gravity schedule by `elapsed_ms`.
    ///
    /// Returns true if at least one gravity step was applied.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.paused || self.game_over {
            return false;
        }

        self.gravity.advance(elapsed_ms);

        let mut stepped = false;
        while self.gravity.try_fire() {
            stepped |= self.gravity_step();
            if self.game_over {
                break;
            }
        }
        stepped
    }

    /// Apply a game command
    pub fn apply_command(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.request_move(-1, 0),
            GameCommand::MoveRight => self.request_move(1, 0),
            GameCommand::MoveDown => self.request_move(0, 1),
            GameCommand::RotateCw => self.request_rotate(1),
            GameCommand::RotateCcw => self.request_rotate(-1),
            GameCommand::HardDrop => self.request_hard_drop(),
            GameCommand::Pause => self.request_pause(),
            GameCommand::Resume => self.request_resume(),
            GameCommand::TogglePause => {
                if self.paused {
                    self.request_resume()
                } else {
                    self.request_pause()
                }
            }
            GameCommand::Mute => self.request_mute(),
            GameCommand::Unmute => self.request_unmute(),
            GameCommand::ToggleMute => {
                if self.muted {
                    self.request_unmute()
                } else {
                    self.request_mute()
                }
            }
            GameCommand::NewGame => self.request_new_game(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(seed: u32) -> GameState {
        let mut state = GameState::new(GameConfig::default().with_seed(seed));
        state.start();
        state
    }

    /// Replace the active piece with a known one
    fn force_piece(state: &mut GameState, piece: Piece) {
        assert!(state.board.can_place(&piece, 0, 0, 0));
        state.active = Some(piece);
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(GameConfig::default());

        assert!(!state.started);
        assert!(!state.game_over);
        assert!(!state.paused);
        assert!(!state.muted);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.phase, Phase::Spawning);
        assert!(state.active.is_none());
        assert!(!state.gravity.is_running());
    }

    #[test]
    fn test_game_start() {
        let mut state = GameState::new(GameConfig::default());
        state.start();

        assert!(state.started);
        assert_eq!(state.phase, Phase::Falling);
        assert!(state.gravity.is_running());

        let piece = state.active.unwrap();
        assert_eq!(piece.x(), 4);
        assert_eq!(piece.y(), -1);
        assert_eq!(piece.rotation(), Rotation::North);

        let events = state.take_events();
        assert_eq!(events[0], GameEvent::NewGame);
        assert_eq!(events[1], GameEvent::Spawned { kind: piece.kind() });
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut state = started(3);
        let piece = state.active;
        state.take_events();

        state.start();
        assert_eq!(state.active, piece);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_request_move() {
        let mut state = started(12345);
        state.take_events();
        let initial_x = state.active.unwrap().x();

        assert!(state.request_move(1, 0));
        assert_eq!(state.active.unwrap().x(), initial_x + 1);

        assert!(state.request_move(-1, 0));
        assert_eq!(state.active.unwrap().x(), initial_x);

        assert_eq!(
            state.take_events(),
            vec![
                GameEvent::Moved { dx: 1, dy: 0 },
                GameEvent::Moved { dx: -1, dy: 0 }
            ]
        );
    }

    #[test]
    fn test_move_into_wall_is_silent() {
        let mut state = started(12345);
        force_piece(&mut state, Piece::new(ShapeKind::O, Rotation::North, -1, 5));
        state.take_events();

        // O occupies columns 1..=2 of its box, so x = -1 touches the left wall
        assert!(!state.request_move(-1, 0));
        assert_eq!(state.active.unwrap().x(), -1);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_blocked_move_down_locks() {
        let mut state = started(12345);
        // O bottom row sits on row 23
        force_piece(&mut state, Piece::new(ShapeKind::O, Rotation::North, 3, 21));
        state.take_events();

        assert!(state.request_move(0, 1));
        assert!(state.board.is_occupied(4, 23));
        assert!(state.board.is_occupied(5, 22));

        let events = state.take_events();
        assert_eq!(events[0], GameEvent::Locked { kind: ShapeKind::O });
        assert!(matches!(events[1], GameEvent::Spawned { .. }));
    }

    #[test]
    fn test_blocked_diagonal_does_not_lock() {
        let mut state = started(12345);
        force_piece(&mut state, Piece::new(ShapeKind::O, Rotation::North, 3, 21));

        assert!(!state.request_move(1, 1));
        assert!(state.board.is_empty());
    }

    #[test]
    fn test_oversized_drop_does_not_lock_in_mid_air() {
        let mut state = started(12345);
        // O bottom row on row 22, one free row below
        force_piece(&mut state, Piece::new(ShapeKind::O, Rotation::North, 3, 20));
        state.take_events();

        assert!(!state.request_move(0, 2));
        assert!(state.board.is_empty());
        assert_eq!(state.active.unwrap().y(), 20);
        assert!(state.take_events().is_empty());

        assert!(state.request_move(0, 1));
        assert_eq!(state.active.unwrap().y(), 21);
        assert!(state.board.is_empty());
    }

    #[test]
    fn test_zero_move_is_rejected() {
        let mut state = started(12345);
        let before = state.active;
        state.take_events();

        assert!(!state.request_move(0, 0));
        assert_eq!(state.active, before);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_extreme_requests_are_silent_rejections() {
        let mut state = started(12345);
        force_piece(&mut state, Piece::new(ShapeKind::T, Rotation::North, 4, 5));
        state.take_events();

        assert!(!state.request_move(i32::MAX, 0));
        assert!(!state.request_move(i32::MIN, 0));
        assert!(!state.request_rotate(i32::MAX));
        // A huge downward move from mid-board is rejected without locking
        assert!(!state.request_move(0, i32::MAX));

        assert_eq!(state.active.unwrap().y(), 5);
        assert!(state.board.is_empty());
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_rotate() {
        let mut state = started(12345);
        force_piece(&mut state, Piece::new(ShapeKind::T, Rotation::North, 4, 5));
        state.take_events();

        assert!(state.request_rotate(1));
        assert_eq!(state.active.unwrap().rotation(), Rotation::East);

        assert!(state.request_rotate(-1));
        assert!(state.request_rotate(-1));
        assert_eq!(state.active.unwrap().rotation(), Rotation::West);

        assert_eq!(
            state.take_events(),
            vec![
                GameEvent::Rotated {
                    rotation: Rotation::East
                },
                GameEvent::Rotated {
                    rotation: Rotation::North
                },
                GameEvent::Rotated {
                    rotation: Rotation::West
                },
            ]
        );
    }

    #[test]
    fn test_rotate_rejects_other_deltas() {
        let mut state = started(12345);
        force_piece(&mut state, Piece::new(ShapeKind::T, Rotation::North, 4, 5));

        assert!(!state.request_rotate(0));
        assert!(!state.request_rotate(2));
        assert_eq!(state.active.unwrap().rotation(), Rotation::North);
    }

    #[test]
    fn test_rotate_blocked_by_wall() {
        let mut state = started(12345);
        // Vertical I hugging the right wall: column x + 2 = 11
        force_piece(&mut state, Piece::new(ShapeKind::I, Rotation::East, 9, 5));
        state.take_events();

        // Back to horizontal would need columns 9..=12
        assert!(!state.request_rotate(-1));
        assert_eq!(state.active.unwrap().rotation(), Rotation::East);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_hard_drop() {
        let mut state = started(12345);
        force_piece(&mut state, Piece::new(ShapeKind::I, Rotation::North, 4, -1));
        state.take_events();

        assert!(state.request_hard_drop());
        // Horizontal I lands on the floor, row 23
        for x in 4..8 {
            assert!(state.board.is_occupied(x, 23));
        }

        let events = state.take_events();
        assert_eq!(events[0], GameEvent::HardDropped { distance: 23 });
        assert_eq!(events[1], GameEvent::Locked { kind: ShapeKind::I });
    }

    #[test]
    fn test_hard_drop_resting_piece_still_locks() {
        let mut state = started(12345);
        force_piece(&mut state, Piece::new(ShapeKind::O, Rotation::North, 3, 21));
        assert_eq!(state.drop_distance(), Some(0));
        state.take_events();

        assert!(state.request_hard_drop());
        assert_eq!(state.board.occupied_count(), 4);
        assert_eq!(state.take_events()[0], GameEvent::HardDropped { distance: 0 });
    }

    #[test]
    fn test_ghost_cells() {
        let mut state = started(12345);
        force_piece(&mut state, Piece::new(ShapeKind::O, Rotation::North, 0, 0));

        let ghost = state.current_ghost_cells().unwrap();
        assert_eq!(ghost.as_slice(), &[(1, 22), (2, 22), (1, 23), (2, 23)]);
        // Ghost is a projection only
        assert!(state.board.is_empty());
    }

    #[test]
    fn test_single_line_clear_scores_100() {
        let mut state = started(12345);
        for x in 0..12 {
            if x != 5 && x != 6 {
                state.board.set_occupied(x, 23, true);
            }
        }
        // O fills columns 5..=6 on rows 22..=23
        force_piece(&mut state, Piece::new(ShapeKind::O, Rotation::North, 4, 0));
        state.take_events();

        assert!(state.request_hard_drop());
        assert_eq!(state.score, 100);
        assert_eq!(state.lines, 1);
        assert_eq!(state.level, 1);

        // The O's upper half dropped into the bottom row
        assert!(state.board.is_occupied(5, 23));
        assert!(state.board.is_occupied(6, 23));
        assert_eq!(state.board.occupied_count(), 2);

        let events = state.take_events();
        assert!(events.contains(&GameEvent::LinesCleared {
            count: 1,
            rows: vec![23]
        }));
        assert!(events.contains(&GameEvent::ScoreChanged { score: 100 }));
    }

    #[test]
    fn test_four_line_clear_scores_800_and_levels_up() {
        let mut state = started(12345);
        state.lines = 8;
        for y in 20..24 {
            for x in 0..11 {
                state.board.set_occupied(x, y, true);
            }
        }
        // Vertical I in the last column
        force_piece(&mut state, Piece::new(ShapeKind::I, Rotation::East, 9, 0));
        state.take_events();

        assert!(state.request_hard_drop());
        assert_eq!(state.score, 800);
        assert_eq!(state.lines, 12);
        assert_eq!(state.level, 2);
        assert!(state.board.is_empty());

        // Gravity re-armed at the faster interval
        assert_eq!(state.gravity.interval_ms(), 850);
        assert_eq!(state.gravity.elapsed_ms(), 0);

        let events = state.take_events();
        assert!(events.contains(&GameEvent::LinesCleared {
            count: 4,
            rows: vec![20, 21, 22, 23]
        }));
        assert!(events.contains(&GameEvent::LevelChanged { level: 2 }));
    }

    #[test]
    fn test_score_accumulates_across_locks() {
        let mut state = started(12345);
        for x in 0..11 {
            state.board.set_occupied(x, 23, true);
        }
        force_piece(&mut state, Piece::new(ShapeKind::I, Rotation::East, 9, 0));
        state.request_hard_drop();
        assert_eq!(state.score, 100);

        // I remnant fills (11, 21..=23) after the shift; complete rows 22 and 23
        for y in 22..24 {
            for x in 0..10 {
                state.board.set_occupied(x, y, true);
            }
        }
        force_piece(&mut state, Piece::new(ShapeKind::I, Rotation::East, 8, 0));
        state.request_hard_drop();

        assert_eq!(state.score, 400);
        assert_eq!(state.lines, 3);
    }

    #[test]
    fn test_spawn_blocked_is_game_over() {
        let mut state = started(12345);
        for x in 0..12 {
            for y in 0..3 {
                if x != 0 {
                    state.board.set_occupied(x, y, true);
                }
            }
        }
        state.score = 300;
        state.take_events();

        // Lock anything; the next spawn cannot fit
        state.lock_piece();

        assert!(state.game_over);
        assert_eq!(state.phase, Phase::GameOver);
        assert!(state.active.is_none());
        assert!(!state.gravity.is_running());

        let events = state.take_events();
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameOver {
                score: 300,
                lines: 0,
                level: 1
            })
        );
    }

    #[test]
    fn test_commands_after_game_over_are_ignored() {
        let mut state = started(12345);
        state.active = None;
        state.game_over = true;
        state.phase = Phase::GameOver;
        state.take_events();

        assert!(!state.request_move(1, 0));
        assert!(!state.request_rotate(1));
        assert!(!state.request_hard_drop());
        assert!(!state.request_pause());
        assert!(!state.tick(10_000));
        assert!(state.take_events().is_empty());

        // Mute still works
        assert!(state.request_mute());
    }

    #[test]
    fn test_pause_suppresses_movement_and_gravity() {
        let mut state = started(12345);
        let before = state.active;
        state.take_events();

        assert!(state.request_pause());
        assert!(!state.gravity.is_running());
        assert!(!state.request_move(1, 0));
        assert!(!state.request_rotate(1));
        assert!(!state.request_hard_drop());
        assert!(!state.tick(5000));
        assert_eq!(state.active, before);
        assert_eq!(state.take_events(), vec![GameEvent::Paused(true)]);

        // Still accepted while paused
        assert!(state.request_mute());
        assert!(!state.request_pause());

        assert!(state.request_resume());
        assert!(state.gravity.is_running());
        assert_eq!(state.gravity.elapsed_ms(), 0);
        assert!(!state.request_resume());
    }

    #[test]
    fn test_tick_applies_gravity() {
        let mut state = started(12345);
        let y = state.active.unwrap().y();

        assert!(!state.tick(999));
        assert_eq!(state.active.unwrap().y(), y);

        assert!(state.tick(1));
        assert_eq!(state.active.unwrap().y(), y + 1);
    }

    #[test]
    fn test_gravity_locks_resting_piece() {
        let mut state = started(12345);
        force_piece(&mut state, Piece::new(ShapeKind::O, Rotation::North, 3, 21));

        assert!(state.tick(1000));
        assert_eq!(state.board.occupied_count(), 4);
        assert!(state.active.is_some());
    }

    #[test]
    fn test_new_game_cancels_pending_gravity() {
        let mut state = started(12345);
        state.tick(900);
        assert_eq!(state.gravity.elapsed_ms(), 900);

        state.request_new_game();
        let y = state.active.unwrap().y();

        // The 900ms from the old game must not carry over
        assert!(!state.tick(100));
        assert_eq!(state.active.unwrap().y(), y);
        assert_eq!(state.gravity.elapsed_ms(), 100);
    }

    #[test]
    fn test_new_game_resets_counters() {
        let mut state = started(12345);
        state.score = 1200;
        state.lines = 31;
        state.level = 4;
        state.board.set_occupied(0, 23, true);
        state.request_mute();
        state.request_pause();
        state.take_events();

        assert!(state.request_new_game());
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.level, 1);
        assert!(!state.paused);
        assert!(state.muted);
        assert!(state.board.is_empty());
        assert_eq!(state.gravity.interval_ms(), 1000);
        assert!(state.gravity.is_running());

        let active = state.active.unwrap();
        assert!(state.board.can_place(&active, 0, 0, 0));
        assert_eq!(state.take_events()[0], GameEvent::NewGame);
    }

    #[test]
    fn test_apply_command_toggles() {
        let mut state = started(12345);

        assert!(state.apply_command(GameCommand::TogglePause));
        assert!(state.paused);
        assert!(state.apply_command(GameCommand::TogglePause));
        assert!(!state.paused);

        assert!(state.apply_command(GameCommand::ToggleMute));
        assert!(state.muted);
        assert!(state.apply_command(GameCommand::ToggleMute));
        assert!(!state.muted);
    }

    #[test]
    fn test_snapshot() {
        let mut state = started(12345);
        force_piece(&mut state, Piece::new(ShapeKind::O, Rotation::North, 0, 0));
        state.board.set_occupied(11, 23, true);

        let snap = state.snapshot();
        assert_eq!(snap.width, 12);
        assert_eq!(snap.height, 24);
        assert!(snap.is_occupied(11, 23));
        assert_eq!(snap.active_cells.as_slice(), &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        assert_eq!(snap.ghost_cells.len(), 4);
        assert_eq!(snap.gravity_ms, 1000);
        assert!(snap.playable());
    }
}
