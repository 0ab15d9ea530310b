//! Error types for document parsing.

use thiserror::Error;

/// Errors that can occur while parsing JSON text into a document tree.
///
/// Every variant carries the byte offset into the input at which the
/// failure was detected, available uniformly through
/// [`ParseError::offset`]. The encoder has no error type: it is
/// infallible by construction (non-finite floats degrade to `null`
/// instead of failing the serialization).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended in the middle of a value, string, or literal.
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEof { offset: usize },

    /// A character that cannot appear where it does.
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// A number literal the active numeric policy could not convert.
    #[error("malformed number at byte {offset}")]
    MalformedNumber { offset: usize },

    /// Arrays/objects nested deeper than the supported limit.
    #[error("nesting deeper than the supported limit at byte {offset}")]
    TooDeep { offset: usize },

    /// Bytes remain after a complete document.
    #[error("trailing data after document at byte {offset}")]
    TrailingData { offset: usize },
}

impl ParseError {
    /// Byte offset into the input at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedEof { offset }
            | ParseError::Syntax { offset, .. }
            | ParseError::MalformedNumber { offset }
            | ParseError::TooDeep { offset }
            | ParseError::TrailingData { offset } => *offset,
        }
    }
}

/// Convenience alias used throughout polyjson-core.
pub type Result<T> = std::result::Result<T, ParseError>;
