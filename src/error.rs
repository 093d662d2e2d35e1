// src/error.rs
//! Error types for reading font descriptors and converting them to character maps.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a font descriptor document could not be turned into a character map.
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// Invalid JSON, or a required field is missing or has the wrong type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("character key {0:?} must be exactly one Unicode character")]
    InvalidCharacterKey(String),

    /// The name would not read back from the character map header unchanged.
    #[error(
        "font name {0:?} cannot be written to a character map \
         (leading '#', surrounding whitespace or a line break)"
    )]
    UnwritableName(String),
}

/// The error raised for the first file that fails to convert.
///
/// Every variant names the file it concerns.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("malformed input in '{}': {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: DescriptorError,
    },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn malformed(path: &Path, source: impl Into<DescriptorError>) -> Self {
        ConvertError::MalformedInput {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The file the error concerns.
    pub fn path(&self) -> &Path {
        match self {
            ConvertError::MalformedInput { path, .. } | ConvertError::Io { path, .. } => path,
        }
    }
}
