//! Line-buffered token reader for plain-text rasters.
//!
//! [`LineReader`] holds exactly one line of input at a time and hands out
//! whitespace-separated tokens from it, pulling the next line when the
//! current one is exhausted. Lines whose first character is `#` are comments
//! and are never exposed: they are discarded as soon as they are loaded.
//!
//! Because the current line stays buffered, looking at it ([`peek_line`])
//! does not consume anything, so the header parser never has to seek
//! backwards. Token reads stop at the first whitespace byte without consuming
//! it, so no character of the following token is ever swallowed.
//!
//! [`peek_line`]: LineReader::peek_line

use std::io::{self, BufRead};
use std::str::FromStr;

use crate::api::{EdgeError, FormatError};

/// Reader over a buffered text stream, one line at a time.
pub struct LineReader<R> {
    inner: R,
    /// Current line including its terminator.
    line: String,
    /// Byte position of the next unread character within `line`.
    cursor: usize,
    /// Stream offset of the first byte of `line`.
    line_start: u64,
    /// Number of comment lines discarded so far.
    comments: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader positioned at the start of the stream.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            cursor: 0,
            line_start: 0,
            comments: 0,
        }
    }

    /// Stream offset of the next unread byte.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.line_start + self.cursor as u64
    }

    /// Number of comment lines skipped so far.
    #[inline]
    pub fn comments_skipped(&self) -> usize {
        self.comments
    }

    /// Return the unread part of the current non-comment line without
    /// consuming it, line terminator stripped.
    ///
    /// If the current line is fully consumed, the next non-comment line is
    /// loaded first. Returns `None` at end of stream.
    pub fn peek_line(&mut self) -> io::Result<Option<&str>> {
        if self.cursor >= self.line.len() && !self.load_line()? {
            return Ok(None);
        }
        let rest = &self.line[self.cursor..];
        Ok(Some(rest.trim_end_matches(['\n', '\r'])))
    }

    /// Skip `count` characters of the current line.
    ///
    /// Stops at the end of the line; never crosses into the next one.
    pub fn advance_chars(&mut self, count: usize) {
        let rest = &self.line[self.cursor..];
        let bytes = rest
            .char_indices()
            .nth(count)
            .map(|(index, _)| index)
            .unwrap_or(rest.len());
        self.cursor += bytes;
    }

    /// Return the next whitespace-separated token, crossing line boundaries
    /// and skipping comment lines. Returns `None` at end of stream.
    pub fn next_token(&mut self) -> io::Result<Option<&str>> {
        loop {
            let rest = &self.line[self.cursor..];
            self.cursor += rest.len() - rest.trim_start().len();
            if self.cursor < self.line.len() {
                break;
            }
            if !self.load_line()? {
                return Ok(None);
            }
        }

        let start = self.cursor;
        let rest = &self.line[start..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.cursor += len;
        Ok(Some(&self.line[start..start + len]))
    }

    /// Read the next token and parse it as `T`.
    ///
    /// `expected` names the value in error messages ("width", "red sample").
    pub fn parse_next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, EdgeError> {
        match self.next_token()? {
            Some(token) => token.parse().map_err(|_| {
                FormatError::InvalidToken {
                    expected,
                    token: token.to_string(),
                }
                .into()
            }),
            None => Err(EdgeError::UnexpectedEof {
                expected,
                offset: self.offset(),
            }),
        }
    }

    /// Replace the buffer with the next non-comment line.
    ///
    /// Returns `false` at end of stream, leaving the buffer empty.
    fn load_line(&mut self) -> io::Result<bool> {
        loop {
            self.line_start += self.line.len() as u64;
            self.line.clear();
            self.cursor = 0;

            if self.inner.read_line(&mut self.line)? == 0 {
                return Ok(false);
            }
            if !self.line.starts_with('#') {
                return Ok(true);
            }

            self.comments += 1;
            tracing::trace!(
                offset = self.line_start,
                comment = self.line.trim_end(),
                "Skipping comment line"
            );
        }
    }
}
