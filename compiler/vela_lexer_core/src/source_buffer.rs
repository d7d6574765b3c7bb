//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! letting the cursor detect EOF without bounds checking in the common
//! case. Padding after the sentinel makes `peek()`/`peek2()` safe at any
//! position.
//!
//! # Input normalization
//!
//! [`SourceBuffer::from_reader`] and [`SourceBuffer::from_path`] read the
//! input line by line and re-append `\n` after each line, so a file whose
//! last line lacks a trailing newline still terminates every production
//! cleanly. [`SourceBuffer::new`] takes text as-is for callers that already
//! hold a normalized buffer.

use crate::Cursor;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// The source text (valid UTF-8, no sentinel).
    text: String,
    /// Byte copy of the source with sentinel and zero padding appended.
    buf: Vec<u8>,
}

impl SourceBuffer {
    /// Create a buffer from already-materialized source text.
    pub fn new(source: impl Into<String>) -> Self {
        let text = source.into();
        let source_len = text.len();

        // Round up to the next 64-byte boundary (minimum: source + sentinel).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(text.as_bytes());

        SourceBuffer { text, buf }
    }

    /// Read and normalize source from any reader.
    ///
    /// Lines are read one at a time and `\n` is re-appended after each, so
    /// the buffer always ends with a newline (unless the input is empty).
    pub fn from_reader(reader: impl Read) -> io::Result<Self> {
        let mut text = String::new();
        for line in BufReader::new(reader).lines() {
            text.push_str(&line?);
            text.push('\n');
        }
        Ok(Self::new(text))
    }

    /// Read and normalize source from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// The source text (without sentinel or padding).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the source content in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source files are bounded by u32 offsets throughout the front-end"
    )]
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, &self.text)
    }
}
