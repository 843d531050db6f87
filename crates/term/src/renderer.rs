//! TerminalRenderer: flushes a frame to a real terminal.
//!
//! Commands are queued into an in-memory buffer and written with a single
//! flush per frame. After the first frame only rows that changed are redrawn.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::frame::{Frame, Tint};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Frame>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, swapping it into internal state.
    ///
    /// Callers keep one `Frame` and pass it in every frame. The renderer
    /// compares against the previous frame, then swaps so the caller gets
    /// the old buffer back to render into.
    pub fn draw_swap(&mut self, frame: &mut Frame) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if prev.width() == frame.width() && prev.height() == frame.height() => {
                encode_changed_rows_into(&prev, frame, &mut self.buf)?;
                std::mem::swap(&mut prev, frame);
                self.last = Some(prev);
            }
            _ => {
                encode_full_into(frame, &mut self.buf)?;
                self.last = Some(frame.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for y in 0..frame.height() {
        encode_row_into(frame, y, out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the rows that differ between `prev` and `next`.
pub fn encode_changed_rows_into(prev: &Frame, next: &Frame, out: &mut Vec<u8>) -> Result<()> {
    for y in changed_rows(prev, next) {
        encode_row_into(next, y, out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Rows of `next` that differ from `prev`; every row when the sizes differ
pub fn changed_rows<'a>(prev: &'a Frame, next: &'a Frame) -> impl Iterator<Item = u16> + 'a {
    let resized = prev.width() != next.width() || prev.height() != next.height();
    (0..next.height()).filter(move |&y| resized || prev.row(y) != next.row(y))
}

fn encode_row_into(frame: &Frame, y: u16, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, y))?;
    let mut current: Option<Tint> = None;
    for glyph in frame.row(y) {
        if current != Some(glyph.tint) {
            apply_tint_into(out, glyph.tint)?;
            current = Some(glyph.tint);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn apply_tint_into(out: &mut Vec<u8>, tint: Tint) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(tint_color(tint)))?;
    match tint {
        Tint::Active | Tint::Label | Tint::Banner => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Tint::Empty | Tint::Ghost => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Tint::Plain | Tint::Locked | Tint::Border => {}
    }
    Ok(())
}

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Plain => Color::Rgb {
            r: 220,
            g: 220,
            b: 220,
        },
        Tint::Empty => Color::Rgb {
            r: 90,
            g: 90,
            b: 100,
        },
        Tint::Locked => Color::Rgb {
            r: 80,
            g: 120,
            b: 220,
        },
        Tint::Active => Color::Rgb {
            r: 240,
            g: 220,
            b: 80,
        },
        Tint::Ghost => Color::Rgb {
            r: 140,
            g: 140,
            b: 140,
        },
        Tint::Border => Color::Rgb {
            r: 200,
            g: 200,
            b: 200,
        },
        Tint::Label | Tint::Banner => Color::Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
    }
}
