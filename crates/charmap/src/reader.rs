//! Reading character maps back from their text form.
//!
//! The reader is lenient in the same places consumers of the format are:
//! blank lines and `#` comments may appear anywhere, and columns may carry
//! arbitrary surrounding whitespace.

use crate::error::CharMapError;
use crate::glyph::{CharMap, Glyph, GlyphMetrics};
use crate::kind::FontKind;
use crate::writer::TEXTURE_PREFIX;
use std::str::FromStr;

const GLYPH_COLUMNS: usize = 8;

impl CharMap {
    /// Parse a character map from text.
    ///
    /// The first data line is the `<name>, <size>, <kind>` header; every
    /// following data line describes one glyph. The atlas file name is taken
    /// from a `# Character map for texture` comment preceding the header.
    ///
    /// Rendering a map and parsing the text yields an equal map as long as its
    /// name passes [`CharMap::is_writable_name`].
    pub fn parse(text: &str) -> Result<CharMap, CharMapError> {
        let mut texture = String::new();
        let mut map: Option<CharMap> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim_start();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with('#') {
                if map.is_none()
                    && let Some(rest) = trimmed.strip_prefix(TEXTURE_PREFIX)
                {
                    texture = rest.trim().to_string();
                }
                continue;
            }

            match map.as_mut() {
                None => map = Some(parse_header(line, raw, std::mem::take(&mut texture))?),
                Some(map) => map.push(parse_glyph(line, raw)?),
            }
        }

        let map = map.ok_or(CharMapError::MissingHeader)?;
        log::debug!(
            "Parsed character map for '{}' ({}) with {} glyphs",
            map.name,
            map.kind,
            map.len()
        );
        Ok(map)
    }
}

impl FromStr for CharMap {
    type Err = CharMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharMap::parse(s)
    }
}

/// Split `<name>, <size>, <kind>` from the right so commas inside the name survive.
fn parse_header(line: usize, raw: &str, texture: String) -> Result<CharMap, CharMapError> {
    let malformed = || CharMapError::MalformedHeader {
        line,
        content: raw.to_string(),
    };

    let mut parts = raw.rsplitn(3, ',');
    let kind = parts.next().ok_or_else(malformed)?.trim();
    let size = parts.next().ok_or_else(malformed)?.trim();
    let name = parts.next().ok_or_else(malformed)?.trim();
    if size.is_empty() {
        return Err(malformed());
    }

    let kind = kind.parse::<FontKind>().map_err(|_| CharMapError::UnknownKind {
        line,
        value: kind.to_string(),
    })?;
    Ok(CharMap::new(texture, name, size, kind))
}

fn parse_glyph(line: usize, raw: &str) -> Result<Glyph, CharMapError> {
    let columns: Vec<&str> = raw.split(',').map(str::trim).collect();
    if columns.len() != GLYPH_COLUMNS {
        return Err(CharMapError::ColumnCount {
            line,
            found: columns.len(),
        });
    }

    let mut values = [0i64; GLYPH_COLUMNS];
    for (i, column) in columns.iter().enumerate() {
        values[i] = column.parse().map_err(|_| CharMapError::InvalidNumber {
            line,
            column: i + 1,
            value: column.to_string(),
        })?;
    }

    let [codepoint, x, y, width, height, origin_x, origin_y, advance] = values;
    let ch = u32::try_from(codepoint)
        .ok()
        .and_then(char::from_u32)
        .ok_or(CharMapError::InvalidCodepoint {
            line,
            value: codepoint,
        })?;

    Ok(Glyph::new(
        ch,
        GlyphMetrics {
            x,
            y,
            width,
            height,
            origin_x,
            origin_y,
            advance,
        },
    ))
}
