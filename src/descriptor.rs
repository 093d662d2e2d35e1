//! The glyph-metadata document written by the texture atlas generator.

use crate::error::DescriptorError;
use glyphmap_charmap::{CharMap, FontKind, Glyph, GlyphMetrics};
use indexmap::IndexMap;
use serde::Deserialize;

/// One font face as described by its `.json` metadata document.
///
/// All fields are required; unknown fields are ignored. `characters` keeps the
/// order of the document.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub name: String,
    /// Kept as a JSON number so it is written back exactly as it was read.
    pub size: serde_json::Number,
    pub bold: bool,
    pub italic: bool,
    pub characters: IndexMap<String, GlyphMetrics>,
}

impl FontDescriptor {
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn kind(&self) -> FontKind {
        FontKind::from_style(self.bold, self.italic)
    }

    /// Build the character map for this face, referencing `texture` as its atlas image.
    pub fn to_char_map(&self, texture: &str) -> Result<CharMap, DescriptorError> {
        if !CharMap::is_writable_name(&self.name) {
            return Err(DescriptorError::UnwritableName(self.name.clone()));
        }
        let glyphs = self
            .characters
            .iter()
            .map(|(key, metrics)| single_char(key).map(|ch| Glyph::new(ch, *metrics)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CharMap::new(texture, self.name.as_str(), self.size.to_string(), self.kind())
            .with_glyphs(glyphs))
    }
}

fn single_char(key: &str) -> Result<char, DescriptorError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(DescriptorError::InvalidCharacterKey(key.to_string())),
    }
}
