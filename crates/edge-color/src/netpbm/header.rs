//! Tolerant P3 header parsing.
//!
//! The header line is the first line that is not a comment. Its second
//! character is the format tag and must be `3`. Two layouts are accepted:
//!
//! ```text
//! Compact            Inline
//! -------            ------
//! P3                 P3 640 480
//! # comment          255
//! 640 480
//! 255
//! ```
//!
//! In both cases width, height and max intensity are read as
//! whitespace-separated tokens starting right after the tag, with comment
//! lines skipped wherever they appear.

use std::io::BufRead;

use super::reader::LineReader;
use crate::api::{EdgeError, FormatError};

/// The only format tag accepted: ASCII RGB triplets.
pub const ASCII_RGB_TAG: char = '3';

/// How the dimensions were laid out relative to the format tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// The tag is alone on its line; dimensions follow on later lines.
    Compact,
    /// Dimensions follow the tag on the same line.
    Inline,
}

/// Parsed raster header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Format tag (second character of the header line)
    pub format_tag: char,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Maximum channel value declared by the header
    pub max_intensity: u32,
    /// Layout the header was written in
    pub layout: HeaderLayout,
}

impl HeaderInfo {
    /// Number of pixels the payload must contain, `None` on overflow.
    #[inline]
    pub fn pixel_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Number of samples a raster of this size with `channels` values per
    /// pixel holds.
    ///
    /// Fails with [`FormatError::ImageTooLarge`] when the count overflows
    /// `usize`.
    pub fn sample_count(&self, channels: usize) -> Result<usize, FormatError> {
        self.pixel_count()
            .and_then(|pixels| pixels.checked_mul(channels))
            .ok_or(FormatError::ImageTooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// Regenerated header text: tag, dimensions and max intensity on three lines.
    ///
    /// ```
    /// use edge_color::{HeaderInfo, HeaderLayout};
    ///
    /// let header = HeaderInfo {
    ///     format_tag: '3',
    ///     width: 4,
    ///     height: 2,
    ///     max_intensity: 255,
    ///     layout: HeaderLayout::Inline,
    /// };
    /// assert_eq!(header.encode(), "P3\n4 2\n255\n");
    /// ```
    pub fn encode(&self) -> String {
        format!(
            "P{}\n{} {}\n{}\n",
            ASCII_RGB_TAG, self.width, self.height, self.max_intensity
        )
    }
}

/// Parse the header and leave `reader` at the first pixel token.
pub fn parse_header<R: BufRead>(reader: &mut LineReader<R>) -> Result<HeaderInfo, EdgeError> {
    let (format_tag, layout) = {
        let line = match reader.peek_line()? {
            Some(line) => line,
            None => {
                return Err(EdgeError::UnexpectedEof {
                    expected: "header line",
                    offset: reader.offset(),
                })
            }
        };
        let length = line.chars().count();
        if length < 2 {
            return Err(FormatError::UnreadableHeader { length }.into());
        }

        let tag = line.chars().nth(1).unwrap_or_default();
        if tag != ASCII_RGB_TAG {
            return Err(FormatError::UnsupportedFormat { tag }.into());
        }

        let layout = if length == 2 {
            HeaderLayout::Compact
        } else {
            HeaderLayout::Inline
        };
        (tag, layout)
    };

    tracing::debug!(?layout, "Reading P3 header");
    reader.advance_chars(2);

    let width = reader.parse_next("width")?;
    let height = reader.parse_next("height")?;
    let max_intensity = reader.parse_next("max intensity")?;

    let header = HeaderInfo {
        format_tag,
        width,
        height,
        max_intensity,
        layout,
    };
    tracing::debug!(
        width,
        height,
        max_intensity,
        comments = reader.comments_skipped(),
        "Parsed header"
    );
    Ok(header)
}
