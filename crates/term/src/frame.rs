//! Character frame that the view draws into and the renderer flushes.

/// Palette role of a glyph. The renderer maps each role to a terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Plain,
    Empty,
    Locked,
    Active,
    Ghost,
    Border,
    Label,
    Banner,
}

/// A single styled terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub tint: Tint,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        tint: Tint::Plain,
    };

    pub const fn new(ch: char, tint: Tint) -> Self {
        Self { ch, tint }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of glyphs sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are unspecified afterwards.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.glyphs
            .resize(width as usize * height as usize, Glyph::BLANK);
    }

    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::BLANK);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.glyphs
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Glyphs of row `y`; empty when out of range
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    /// Write one glyph; writes outside the frame are dropped
    pub fn put(&mut self, x: u16, y: u16, ch: char, tint: Tint) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = y as usize * self.width as usize + x as usize;
        self.glyphs[i] = Glyph::new(ch, tint);
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, tint: Tint) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x as usize + i;
            if cx >= self.width as usize {
                break;
            }
            self.put(cx as u16, y, ch, tint);
        }
    }

    /// Row `y` as plain text, for tests and logs
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_clips_to_frame() {
        let mut frame = Frame::new(4, 2);
        frame.put_str(2, 0, "abcd", Tint::Label);
        frame.put(9, 9, 'x', Tint::Plain);

        assert_eq!(frame.row_text(0), "  ab");
        assert_eq!(frame.get(3, 0), Some(Glyph::new('b', Tint::Label)));
        assert_eq!(frame.get(4, 0), None);
        assert!(frame.row(2).is_empty());
    }

    #[test]
    fn test_resize_and_clear() {
        let mut frame = Frame::new(2, 2);
        frame.put(0, 0, '#', Tint::Locked);
        frame.resize(3, 1);
        frame.clear();

        assert_eq!(frame.width(), 3);
        assert_eq!(frame.row_text(0), "   ");
    }
}
