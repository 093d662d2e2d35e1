use crate::kind::FontKind;

/// Pixel-space placement of one glyph inside a texture atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GlyphMetrics {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    /// Horizontal distance from the pen position to the left edge of the bitmap.
    pub origin_x: i64,
    /// Vertical distance from the baseline to the top edge of the bitmap.
    pub origin_y: i64,
    pub advance: i64,
}

/// One character together with its metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub metrics: GlyphMetrics,
}

impl Glyph {
    pub fn new(ch: char, metrics: GlyphMetrics) -> Self {
        Self { ch, metrics }
    }

    /// The Unicode scalar value of the character, used as its ordinal.
    pub fn codepoint(&self) -> u32 {
        u32::from(self.ch)
    }
}

/// The character map of a single font face.
///
/// Glyphs keep the order they were supplied in; rendering writes them in that
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CharMap {
    /// File name of the atlas image, e.g. `font1.png`.
    pub texture: String,
    pub name: String,
    /// Font size as written in the source document (`12`, `10.5`, ...).
    pub size: String,
    pub kind: FontKind,
    pub glyphs: Vec<Glyph>,
}

impl CharMap {
    pub fn new(
        texture: impl Into<String>,
        name: impl Into<String>,
        size: impl Into<String>,
        kind: FontKind,
    ) -> Self {
        Self {
            texture: texture.into(),
            name: name.into(),
            size: size.into(),
            kind,
            glyphs: Vec::new(),
        }
    }

    pub fn with_glyphs(mut self, glyphs: Vec<Glyph>) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn push(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    /// Metrics of `ch`, if the face has a glyph for it.
    pub fn get(&self, ch: char) -> Option<&GlyphMetrics> {
        self.glyphs.iter().find(|g| g.ch == ch).map(|g| &g.metrics)
    }

    /// Whether `name` survives a write/parse cycle unchanged.
    ///
    /// The header line is trimmed when read, a leading `#` turns it into a
    /// comment, and a line break splits it.
    pub fn is_writable_name(name: &str) -> bool {
        name.trim() == name && !name.starts_with('#') && !name.contains(['\n', '\r'])
    }

    /// The size parsed as a number: the pixel size the atlas was rendered at.
    pub fn native_size(&self) -> Option<f64> {
        self.size.trim().parse().ok()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
