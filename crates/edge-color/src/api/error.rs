//! Error types for the edge-color pipeline.
//!
//! Two classes of failure exist: the input is not a raster this crate can
//! read ([`FormatError`]), or the stream ran dry or failed underneath us
//! ([`EdgeError::UnexpectedEof`] and [`EdgeError::Io`]). [`EdgeError`] wraps
//! both for `?` propagation.

use thiserror::Error;

/// The input does not have the shape the pipeline requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The header names a format other than ASCII RGB (`P3`).
    #[error("unsupported raster format P{tag} (only P3 is supported)")]
    UnsupportedFormat {
        /// Second character of the header line
        tag: char,
    },

    /// The header line is too short to hold a format tag.
    #[error("unreadable header: first non-comment line has {length} character(s)")]
    UnreadableHeader {
        /// Length of the header line, terminator excluded
        length: usize,
    },

    /// A token could not be parsed as the expected integer.
    #[error("invalid {expected}: {token:?}")]
    InvalidToken {
        /// What the parser was looking for
        expected: &'static str,
        /// The offending token
        token: String,
    },

    /// The Sobel neighborhood needs at least three rows and three columns.
    #[error("image is {width}x{height}, edge filtering needs at least 3x3")]
    ImageTooSmall {
        /// Width from the header
        width: usize,
        /// Height from the header
        height: usize,
    },

    /// The header's dimensions do not fit in addressable memory.
    #[error("image is {width}x{height}, too large to address")]
    ImageTooLarge {
        /// Width from the header
        width: usize,
        /// Height from the header
        height: usize,
    },
}

/// Unified error type for the public API.
///
/// # Example
///
/// ```
/// use edge_color::{process, EdgeError};
///
/// let input = "P6\n1 1\n255\n".as_bytes();
/// let err = process(input, Vec::new()).unwrap_err();
/// assert!(err.is_format());
/// ```
#[derive(Debug, Error)]
pub enum EdgeError {
    /// The input is malformed.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// The stream ended before a required token.
    #[error("unexpected end of input at byte {offset}: expected {expected}")]
    UnexpectedEof {
        /// What the parser was looking for
        expected: &'static str,
        /// Byte offset reached when the stream ran out
        offset: u64,
    },

    /// The underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EdgeError {
    /// Returns `true` for malformed input, `false` for stream failures.
    pub fn is_format(&self) -> bool {
        matches!(self, EdgeError::Format(_))
    }
}
