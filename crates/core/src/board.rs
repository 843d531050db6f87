//! Board module - manages the game grid
//!
//! The board stores one `u32` occupancy word per row: bit `x` of row `y` is set
//! when cell (x, y) holds a locked block. Bits at or beyond the board width are
//! never set.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height
//! (top to bottom). Negative y is the open zone above the board where pieces spawn.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::pieces::Piece;
use crate::types::{MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH};

/// Result of [`Board::clear_full_lines`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    pub count: u32,
    /// Indices of the removed rows before removal, ascending
    pub rows: Vec<usize>,
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    /// One occupancy word per row, top row first
    rows: Vec<u32>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        if width == 0 || width > MAX_BOARD_WIDTH || height == 0 || height > MAX_BOARD_HEIGHT {
            return Err(ConfigError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }
        Ok(Self {
            width,
            rows: vec![0; height as usize],
        })
    }

    /// Create an empty board sized by an already validated config
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            width: config.width(),
            rows: vec![0; config.height() as usize],
        }
    }

    /// Create a board from raw row words (top row first).
    ///
    /// Bits at or beyond `width` are dropped.
    pub fn from_rows(width: u8, rows: &[u32]) -> Result<Self, ConfigError> {
        if rows.len() > MAX_BOARD_HEIGHT as usize {
            return Err(ConfigError::InvalidDimensions {
                width: width as i64,
                height: rows.len() as i64,
            });
        }
        let mut board = Self::new(width, rows.len() as u8)?;
        let full = board.full_mask();
        for (dst, &src) in board.rows.iter_mut().zip(rows) {
            *dst = src & full;
        }
        Ok(board)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.rows.len() as u8
    }

    /// Mask with the low `width` bits set
    #[inline]
    pub fn full_mask(&self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        }
    }

    #[inline]
    fn in_columns(&self, x: i32) -> bool {
        x >= 0 && x < self.width as i32
    }

    /// Check if position is occupied by a locked cell.
    ///
    /// Cells above the board (y < 0) are never occupied. Cells left, right or
    /// below the board report false as well; use [`Board::can_place`] for
    /// wall and floor collisions.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if y < 0 || !self.in_columns(x) {
            return false;
        }
        match self.rows.get(y as usize) {
            Some(row) => (row >> x) & 1 == 1,
            None => false,
        }
    }

    /// Set or clear a cell.
    /// Returns false if out of bounds
    pub fn set_occupied(&mut self, x: i32, y: i32, occupied: bool) -> bool {
        if y < 0 || !self.in_columns(x) {
            return false;
        }
        match self.rows.get_mut(y as usize) {
            Some(row) => {
                if occupied {
                    *row |= 1 << x;
                } else {
                    *row &= !(1 << x);
                }
                true
            }
            None => false,
        }
    }

    /// Whether `piece` moved by (dx, dy) and rotated by `rotation_delta` quarter
    /// turns fits on the board.
    ///
    /// A cell left/right of the walls or at/below the floor is a collision,
    /// as is a transform whose coordinates overflow. Cells above the top row
    /// are allowed. Any other cell must be empty.
    /// Never mutates anything.
    pub fn can_place(&self, piece: &Piece, dx: i32, dy: i32, rotation_delta: i32) -> bool {
        let height = self.rows.len() as i32;
        let Some(cells) = piece.try_cells_with(dx, dy, rotation_delta) else {
            return false;
        };
        cells.iter().all(|&(x, y)| {
            if !self.in_columns(x) || y >= height {
                return false;
            }
            if y < 0 {
                return true;
            }
            !self.is_occupied(x, y)
        })
    }

    /// Lock the cells of `piece` into the board.
    ///
    /// Cells above the top row are skipped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set_occupied(x, y, true);
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        let full = self.full_mask();
        self.rows.get(y).is_some_and(|&row| row == full)
    }

    /// Remove every full row, shifting the rows above down and inserting
    /// empty rows at the top.
    ///
    /// Returns how many rows were removed and their original indices,
    /// ascending. The board is untouched when no row is full.
    pub fn clear_full_lines(&mut self) -> LineClear {
        let full = self.full_mask();
        let cleared: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|&(_, &row)| row == full)
            .map(|(y, _)| y)
            .collect();

        if cleared.is_empty() {
            return LineClear::default();
        }

        // Compact surviving rows toward the bottom, keeping their order
        let mut write_y = self.rows.len();
        for read_y in (0..self.rows.len()).rev() {
            if self.rows[read_y] != full {
                write_y -= 1;
                self.rows[write_y] = self.rows[read_y];
            }
        }
        for row in &mut self.rows[..write_y] {
            *row = 0;
        }

        LineClear {
            count: cleared.len() as u32,
            rows: cleared,
        }
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.rows.fill(0);
    }

    /// Raw occupancy words, top row first
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Iterate the cells of row `y` left to right
    pub fn row_cells(&self, y: usize) -> impl Iterator<Item = bool> + '_ {
        let row = self.rows.get(y).copied().unwrap_or(0);
        (0..self.width).map(move |x| (row >> x) & 1 == 1)
    }

    /// Number of locked cells on the board
    pub fn occupied_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_config(&GameConfig::default())
    }
}
