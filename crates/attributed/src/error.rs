//! Error types for attributed text.

use thiserror::Error;

/// Errors raised when an edit or attribute range does not fit the text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextRangeError {
    /// The range extends past the end of the text.
    #[error("range {start}..{end} is out of bounds for text of length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },

    /// The range start is after its end.
    #[error("inverted range {start}..{end}")]
    Inverted { start: usize, end: usize },

    /// The offset splits a multi-byte character.
    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
}
