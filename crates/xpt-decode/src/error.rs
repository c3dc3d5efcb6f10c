//! Error types for XPT decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding an XPT file.
#[derive(Debug, Error)]
pub enum XptError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Underlying read ended before the requested byte count was supplied.
    #[error("unexpected end of file in {section} at offset {offset}: wanted {expected} bytes")]
    UnexpectedEof {
        section: &'static str,
        offset: u64,
        expected: usize,
    },

    /// Missing required header record.
    #[error("missing header: expected {expected}")]
    MissingHeader { expected: &'static str },

    /// A header count/size field is not parsable as an integer.
    #[error("failed to parse numeric header field {field}: {text:?}")]
    NumericParse { field: &'static str, text: String },

    /// Invalid NAMESTR record.
    #[error("invalid NAMESTR at index {index}: {message}")]
    InvalidNamestr { index: usize, message: String },

    /// Variable type tag outside {1=NUMERIC, 2=CHAR}.
    #[error("invalid variable type tag {tag} in NAMESTR at index {index}")]
    InvalidVariableType { index: usize, tag: u16 },

    /// A fixed-offset field extends past the end of its record.
    #[error("{section}: field at [{start}, {end}) exceeds record length {record_len}")]
    FieldOutOfBounds {
        section: &'static str,
        start: usize,
        end: usize,
        record_len: usize,
    },

    /// Metadata section length overflow.
    #[error("NAMESTR section length overflow")]
    LengthOverflow,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for XPT decoding.
pub type Result<T> = std::result::Result<T, XptError>;

impl XptError {
    /// Create a MissingHeader error.
    pub fn missing_header(expected: &'static str) -> Self {
        Self::MissingHeader { expected }
    }

    /// Create an InvalidNamestr error.
    pub fn invalid_namestr(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidNamestr {
            index,
            message: message.into(),
        }
    }
}
