//! Build-time conversion of texture-atlas glyph metadata into character maps.
//!
//! A texture atlas generator emits one `<font>.png` image plus a `<font>.json`
//! document describing each glyph. This crate turns every such document in a
//! directory into a `<font>.txt` character map (see [`glyphmap_charmap`] for
//! the format).
//!
//! ```no_run
//! let summary = glyphmap::run("data/fonts")?;
//! println!("wrote {} character maps", summary.written.len());
//! # Ok::<(), glyphmap::ConvertError>(())
//! ```

pub mod converter;
pub mod descriptor;
pub mod error;

pub use converter::{ConversionSummary, GlyphMapConverter};
pub use descriptor::FontDescriptor;
pub use error::{ConvertError, DescriptorError};
pub use glyphmap_charmap as charmap;
pub use glyphmap_charmap::{CharMap, FontKind, Glyph, GlyphMetrics};

use std::path::Path;

/// Convert every font descriptor in `dir`, aborting on the first failure.
pub fn run<P: AsRef<Path>>(dir: P) -> Result<ConversionSummary, ConvertError> {
    GlyphMapConverter::new(dir).convert_all()
}
