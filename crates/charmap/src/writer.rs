use crate::glyph::{CharMap, Glyph};
use std::fmt;

/// Prefix of the comment line naming the atlas image.
pub const TEXTURE_PREFIX: &str = "# Character map for texture ";

/// Comment line describing the glyph columns.
pub const FORMAT_LINE: &str = "# Format: ordinal, x, y, width, height, origin x, origin y, advance";

/// Minimum width of every numeric glyph column.
const COLUMN_WIDTH: usize = 5;

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.metrics;
        write!(
            f,
            "{:>w$}, {:>w$}, {:>w$}, {:>w$}, {:>w$}, {:>w$}, {:>w$}, {:>w$}",
            self.codepoint(),
            m.x,
            m.y,
            m.width,
            m.height,
            m.origin_x,
            m.origin_y,
            m.advance,
            w = COLUMN_WIDTH
        )
    }
}

impl fmt::Display for CharMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}", TEXTURE_PREFIX, self.texture)?;
        writeln!(f, "{}, {}, {}", self.name, self.size, self.kind)?;
        writeln!(f, "{}", FORMAT_LINE)?;
        for glyph in &self.glyphs {
            writeln!(f, "{}", glyph)?;
        }
        Ok(())
    }
}
