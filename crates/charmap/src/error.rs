use thiserror::Error;

/// Errors raised while reading a character map back from text.
///
/// Line numbers are 1-based and count every physical line, comments included.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CharMapError {
    #[error("character map has no header line")]
    MissingHeader,

    #[error("line {line}: header must be '<name>, <size>, <kind>', got '{content}'")]
    MalformedHeader { line: usize, content: String },

    #[error("line {line}: unknown font kind '{value}'")]
    UnknownKind { line: usize, value: String },

    #[error("line {line}: expected 8 columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: column {column} is not an integer: '{value}'")]
    InvalidNumber {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("line {line}: {value} is not a Unicode scalar value")]
    InvalidCodepoint { line: usize, value: i64 },
}
