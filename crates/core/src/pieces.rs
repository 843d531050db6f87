//! Pieces module - shape masks, rotation and cell enumeration
//!
//! Each shape is a 4x4 bitmask. The four rotation states are derived from a
//! base layout by repeatedly rotating 90° clockwise, and are all computed at
//! compile time. Bit `15 - (row * 4 + col)` holds cell (row, col), so the top-left
//! cell is the most significant bit.

use arrayvec::ArrayVec;

use crate::error::ConfigError;
use crate::rng::SimpleRng;
use crate::types::{Rotation, ShapeKind, SPAWN_Y};

/// 4x4 occupancy mask for one rotation of a shape
pub type ShapeMask = u16;

/// Absolute board cells of a piece (always exactly 4)
pub type PieceCells = ArrayVec<(i32, i32), 4>;

/// Base layouts in `ShapeKind::ALL` order; `#` is a filled cell.
/// The top row is empty for every shape so a spawn at y = -1 starts on row 0.
const BASE_GRIDS: [[&str; 4]; 7] = [
    // I
    ["....", "####", "....", "...."],
    // O
    ["....", ".##.", ".##.", "...."],
    // T
    ["....", ".#..", "###.", "...."],
    // S
    ["....", ".##.", "##..", "...."],
    // Z
    ["....", "##..", ".##.", "...."],
    // J
    ["....", "#...", "###.", "...."],
    // L
    ["....", "..#.", "###.", "...."],
];

/// All rotation masks, indexed by `[kind.index()][rotation.index()]`
const ROTATIONS: [[ShapeMask; 4]; 7] = build_rotation_table();

/// Bit position of cell (row, col) inside a mask
pub const fn bit_index(row: usize, col: usize) -> u32 {
    (15 - (row * 4 + col)) as u32
}

/// Whether cell (row, col) is set in `mask`
pub const fn mask_has(mask: ShapeMask, row: usize, col: usize) -> bool {
    (mask >> bit_index(row, col)) & 1 == 1
}

const fn grid_to_mask(grid: [&str; 4]) -> ShapeMask {
    let mut mask: ShapeMask = 0;
    let mut row = 0;
    while row < 4 {
        let line = grid[row].as_bytes();
        let mut col = 0;
        while col < 4 {
            if line[col] == b'#' {
                mask |= 1 << bit_index(row, col);
            }
            col += 1;
        }
        row += 1;
    }
    mask
}

/// Rotate a mask 90° clockwise.
///
/// Source cell (row, col) moves to (col, 3 - row).
pub const fn rotate_mask_cw(mask: ShapeMask) -> ShapeMask {
    let mut out: ShapeMask = 0;
    let mut row = 0;
    while row < 4 {
        let mut col = 0;
        while col < 4 {
            if mask_has(mask, row, col) {
                out |= 1 << bit_index(col, 3 - row);
            }
            col += 1;
        }
        row += 1;
    }
    out
}

const fn build_rotation_table() -> [[ShapeMask; 4]; 7] {
    let mut table = [[0; 4]; 7];
    let mut kind = 0;
    while kind < 7 {
        let r0 = grid_to_mask(BASE_GRIDS[kind]);
        let r1 = rotate_mask_cw(r0);
        let r2 = rotate_mask_cw(r1);
        let r3 = rotate_mask_cw(r2);
        table[kind] = [r0, r1, r2, r3];
        kind += 1;
    }
    table
}

/// Get the mask for a shape kind and rotation
pub fn shape_mask(kind: ShapeKind, rotation: Rotation) -> ShapeMask {
    ROTATIONS[kind.index()][rotation.index()]
}

/// All four rotation masks of a shape, North first
pub fn rotations(kind: ShapeKind) -> &'static [ShapeMask; 4] {
    &ROTATIONS[kind.index()]
}

/// Offsets `(col, row)` of the filled cells of a mask, scanned row by row
pub fn mask_offsets(mask: ShapeMask) -> impl Iterator<Item = (i32, i32)> {
    (0..4usize).flat_map(move |row| {
        (0..4usize)
            .filter(move |&col| mask_has(mask, row, col))
            .map(move |col| (col as i32, row as i32))
    })
}

/// Horizontal spawn coordinate for a board of the given width
pub fn spawn_x(board_width: u8) -> i32 {
    board_width as i32 / 2 - 2
}

/// A piece: shape, rotation and the board position of its 4x4 bounding box.
///
/// Position and rotation only change through [`Piece::translated`] and
/// [`Piece::rotated`], which the game state applies after the board has
/// validated the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    rotation: Rotation,
    x: i32,
    y: i32,
}

impl Piece {
    pub fn new(kind: ShapeKind, rotation: Rotation, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Create a piece from a shape name such as `"t"`
    pub fn from_name(name: &str, x: i32, y: i32) -> Result<Self, ConfigError> {
        let kind =
            ShapeKind::from_str(name).ok_or_else(|| ConfigError::UnknownShape(name.to_string()))?;
        Ok(Self::new(kind, Rotation::North, x, y))
    }

    /// Create a piece at the spawn position for a board of the given width
    pub fn spawn(kind: ShapeKind, board_width: u8) -> Self {
        Self::new(kind, Rotation::North, spawn_x(board_width), SPAWN_Y)
    }

    /// Create a uniformly random piece at the spawn position
    pub fn random(rng: &mut SimpleRng, board_width: u8) -> Self {
        Self::spawn(rng.next_shape(), board_width)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Mask for the current rotation
    pub fn mask(&self) -> ShapeMask {
        shape_mask(self.kind, self.rotation)
    }

    /// Absolute board cells occupied at the current rotation and position
    pub fn cells(&self) -> PieceCells {
        self.cells_with(0, 0, 0)
    }

    /// Cells the piece would occupy after moving by (dx, dy) and rotating by `rotation_delta`.
    ///
    /// Empty when a coordinate would overflow `i32`; see [`Piece::try_cells_with`].
    pub fn cells_with(&self, dx: i32, dy: i32, rotation_delta: i32) -> PieceCells {
        self.try_cells_with(dx, dy, rotation_delta)
            .unwrap_or_default()
    }

    /// Like [`Piece::cells_with`], but `None` when a coordinate would overflow `i32`
    pub fn try_cells_with(&self, dx: i32, dy: i32, rotation_delta: i32) -> Option<PieceCells> {
        let mask = shape_mask(self.kind, self.rotation.offset(rotation_delta));
        let ox = self.x.checked_add(dx)?;
        let oy = self.y.checked_add(dy)?;
        mask_offsets(mask)
            .map(|(c, r)| Some((ox.checked_add(c)?, oy.checked_add(r)?)))
            .collect()
    }

    pub(crate) fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub(crate) fn rotated(&self, delta: i32) -> Self {
        Self {
            rotation: self.rotation.offset(delta),
            ..*self
        }
    }
}
