//! BoardView: lays a `GameSnapshot` out into a terminal [`Frame`].
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::frame::{Frame, Tint};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const KEY_HELP: [&str; 7] = [
    "←→/AD  move",
    "↓/S    down",
    "↑/W    rotate",
    "Z/Q    rotate ccw",
    "Space  drop",
    "P pause  M mute",
    "Enter  new game",
];

pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render a snapshot into a reused frame, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, frame: &mut Frame) {
        frame.resize(viewport.width, viewport.height);
        frame.clear();

        let board_w = snap.width as u16 * self.cell_w;
        let board_h = snap.height as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(frame, start_x, start_y, frame_w, frame_h);

        for y in 0..snap.height as i32 {
            for x in 0..snap.width as i32 {
                let (ch, tint) = if snap.is_active_cell(x, y) {
                    ('█', Tint::Active)
                } else if snap.is_occupied(x, y) {
                    ('█', Tint::Locked)
                } else if snap.is_ghost_cell(x, y) {
                    ('░', Tint::Ghost)
                } else {
                    ('·', Tint::Empty)
                };
                self.fill_cell(frame, start_x, start_y, x as u16, y as u16, ch, tint);
            }
        }

        self.draw_side_panel(frame, snap, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_banner(frame, start_x, start_y, frame_w, frame_h, "GAME OVER");
            self.draw_centered(
                frame,
                start_x,
                start_y.saturating_add(frame_h / 2 + 1),
                frame_w,
                "Enter: new game",
                Tint::Label,
            );
        } else if snap.paused {
            self.draw_banner(frame, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new frame.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut frame);
        frame
    }

    fn draw_border(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        frame.put(x, y, '┌', Tint::Border);
        frame.put(x + w - 1, y, '┐', Tint::Border);
        frame.put(x, y + h - 1, '└', Tint::Border);
        frame.put(x + w - 1, y + h - 1, '┘', Tint::Border);
        for dx in 1..w - 1 {
            frame.put(x + dx, y, '─', Tint::Border);
            frame.put(x + dx, y + h - 1, '─', Tint::Border);
        }
        for dy in 1..h - 1 {
            frame.put(x, y + dy, '│', Tint::Border);
            frame.put(x + w - 1, y + dy, '│', Tint::Border);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        frame: &mut Frame,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        tint: Tint,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y;
        for dx in 0..self.cell_w {
            frame.put(px + dx, py, ch, tint);
        }
    }

    fn draw_side_panel(&self, frame: &mut Frame, snap: &GameSnapshot, x: u16, start_y: u16) {
        if x >= frame.width() {
            return;
        }

        let mut y = start_y;
        let mut stat = |frame: &mut Frame, label: &str, value: String| {
            frame.put_str(x, y, label, Tint::Label);
            frame.put_str(x, y + 1, &value, Tint::Plain);
            y = y.saturating_add(3);
        };
        stat(frame, "SCORE", snap.score.to_string());
        stat(frame, "LINES", snap.lines.to_string());
        stat(frame, "LEVEL", snap.level.to_string());
        stat(frame, "SPEED", format!("{}ms", snap.gravity_ms));
        let sound = if snap.muted { "off" } else { "on" };
        stat(frame, "SOUND", sound.to_string());

        for line in KEY_HELP {
            frame.put_str(x, y, line, Tint::Plain);
            y = y.saturating_add(1);
        }
    }

    fn draw_banner(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16, text: &str) {
        self.draw_centered(frame, x, y.saturating_add(h / 2), w, text, Tint::Banner);
    }

    fn draw_centered(&self, frame: &mut Frame, x: u16, y: u16, w: u16, text: &str, tint: Tint) {
        let text_w = text.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
        frame.put_str(tx, y, text, tint);
    }
}
