//! Plain-text character maps for texture-atlas fonts.
//!
//! A character map describes where each glyph of one font face lives inside
//! its texture atlas image. The text form looks like this:
//!
//! ```text
//! # Character map for texture font1.png
//! Sans, 12, bold
//! # Format: ordinal, x, y, width, height, origin x, origin y, advance
//!    65,     1,     2,     3,     4,     5,     6,     7
//! ```
//!
//! [`CharMap`] renders to that form through [`std::fmt::Display`] and reads it
//! back with [`CharMap::parse`].

mod error;
mod glyph;
mod kind;
mod reader;
mod writer;

pub use error::CharMapError;
pub use glyph::{CharMap, Glyph, GlyphMetrics};
pub use kind::FontKind;
pub use writer::{FORMAT_LINE, TEXTURE_PREFIX};
