//! Directory-wide conversion of glyph metadata documents into character maps.
//!
//! Every `<base>.json` in the directory produces `<base>.txt` next to it,
//! referencing `<base>.png` as its texture atlas. The first failing file
//! aborts the run.

use crate::descriptor::FontDescriptor;
use crate::error::{ConvertError, DescriptorError};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const INPUT_SUFFIX: &str = ".json";
const OUTPUT_SUFFIX: &str = ".txt";
const TEXTURE_SUFFIX: &str = ".png";

/// What a completed run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Character maps written, in processing order.
    pub written: Vec<PathBuf>,
    /// Directory entries that were not font descriptors.
    pub ignored: usize,
}

/// Converts every font descriptor in one directory.
#[derive(Debug, Clone)]
pub struct GlyphMapConverter {
    dir: PathBuf,
}

impl GlyphMapConverter {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The `.json` files of the directory, in directory-listing order.
    pub fn inputs(&self) -> Result<Vec<PathBuf>, ConvertError> {
        self.scan().map(|(inputs, _)| inputs)
    }

    /// Convert all descriptors in the directory, stopping at the first error.
    pub fn convert_all(&self) -> Result<ConversionSummary, ConvertError> {
        let (inputs, ignored) = self.scan()?;
        log::info!(
            "Found {} font descriptor(s) in {}",
            inputs.len(),
            self.dir.display()
        );

        let mut summary = ConversionSummary {
            written: Vec::with_capacity(inputs.len()),
            ignored,
        };
        for input in &inputs {
            summary.written.push(self.convert_path(input)?);
        }

        log::info!(
            "Wrote {} character map(s), ignored {} other entr{}",
            summary.written.len(),
            summary.ignored,
            if summary.ignored == 1 { "y" } else { "ies" }
        );
        Ok(summary)
    }

    /// Convert a single descriptor and return the path of the written character map.
    ///
    /// A relative `input` is resolved against the converter's directory.
    /// Nothing is written unless the whole document converts.
    pub fn convert_file<P: AsRef<Path>>(&self, input: P) -> Result<PathBuf, ConvertError> {
        self.convert_path(&self.dir.join(input))
    }

    fn convert_path(&self, input: &Path) -> Result<PathBuf, ConvertError> {
        let json = fs::read_to_string(input).map_err(|e| ConvertError::io(input, e))?;
        let descriptor =
            FontDescriptor::from_json(&json).map_err(|e| ConvertError::malformed(input, e))?;
        let text = render(&descriptor, &texture_name(input))
            .map_err(|e| ConvertError::malformed(input, e))?;

        let output = output_path(input);
        write_atomically(&output, &text).map_err(|e| ConvertError::io(&output, e))?;
        log::info!(
            "Wrote {} ({} glyphs, {})",
            output.display(),
            descriptor.characters.len(),
            descriptor.kind()
        );
        Ok(output)
    }

    fn scan(&self) -> Result<(Vec<PathBuf>, usize), ConvertError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| ConvertError::io(&self.dir, e))?;

        let mut inputs = Vec::new();
        let mut ignored = 0;
        for entry in entries {
            let entry = entry.map_err(|e| ConvertError::io(&self.dir, e))?;
            let path = entry.path();

            if !has_input_suffix(&entry.file_name()) {
                log::debug!("Skipping {}", path.display());
                ignored += 1;
                continue;
            }
            if !path.is_file() {
                log::debug!("Skipping {}: not a regular file", path.display());
                ignored += 1;
                continue;
            }
            inputs.push(path);
        }
        Ok((inputs, ignored))
    }
}

/// Render the character map text for `descriptor`.
pub fn render(descriptor: &FontDescriptor, texture: &str) -> Result<String, DescriptorError> {
    Ok(descriptor.to_char_map(texture)?.to_string())
}

/// File name of the atlas image paired with `input`: `fonts/a.json` gives `a.png`.
///
/// Bytes of the file name that are not UTF-8 are replaced with U+FFFD.
pub fn texture_name(input: &Path) -> String {
    with_suffix(base_name(input), TEXTURE_SUFFIX)
        .to_string_lossy()
        .into_owned()
}

/// Where the character map for `input` is written: `fonts/a.json` gives `fonts/a.txt`.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_file_name(with_suffix(base_name(input), OUTPUT_SUFFIX))
}

/// Suffix test on the raw name, so names that are not UTF-8 still match.
fn has_input_suffix(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(INPUT_SUFFIX.as_bytes())
}

// Not `Path::file_stem`: a file named exactly `.json` has base name "".
#[cfg(unix)]
fn base_name(input: &Path) -> OsString {
    use std::os::unix::ffi::OsStrExt;

    let name = input.file_name().unwrap_or_default().as_bytes();
    let base = name.strip_suffix(INPUT_SUFFIX.as_bytes()).unwrap_or(name);
    OsStr::from_bytes(base).to_os_string()
}

#[cfg(not(unix))]
fn base_name(input: &Path) -> OsString {
    let name = input.file_name().unwrap_or_default();
    match name.to_str().and_then(|n| n.strip_suffix(INPUT_SUFFIX)) {
        Some(base) => OsString::from(base),
        None => name.to_os_string(),
    }
}

fn with_suffix(mut base: OsString, suffix: &str) -> OsString {
    base.push(suffix);
    base
}

/// Write `contents` to a temporary sibling of `path`, then rename it over `path`.
fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".glyphmap-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
