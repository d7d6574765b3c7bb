//! Span utility functions for diagnostic rendering.
//!
//! [`LineOffsetTable`] pre-computes line start offsets so the emitter can
//! map byte offsets to line/column pairs in O(log L) instead of rescanning
//! the source per label.

use vela_ir::Span;

/// Pre-computed line offset table for efficient line/column lookup.
///
/// # Example
///
/// ```
/// use vela_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 12), (3, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`; each later entry
    /// is the byte after a `\n`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text: O(n) construction for
    /// O(log L) lookups, L being the line count.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source files are bounded by u32 offsets throughout the front-end"
    )]
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                offsets.push((i + 1) as u32);
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get the 1-based line number containing a byte offset.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get 1-based (line, column) for a byte offset.
    ///
    /// The column counts characters (not bytes) from the line start.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets.get((line - 1) as usize).copied().unwrap_or(0) as usize;
        let offset = (offset as usize).min(source.len());

        let col_chars = source[line_start..offset].chars().count();
        let col = u32::try_from(col_chars).unwrap_or(u32::MAX - 1) + 1;
        (line, col)
    }

    /// Get the 1-based line number where a span starts.
    pub fn line_of_span(&self, span: Span) -> u32 {
        self.line_from_offset(span.start)
    }

    /// Get the byte offset of a line start (1-based line number), or
    /// `None` if out of range.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Extract the full text of a 1-based line, without its newline.
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> &'a str {
        let Some(start) = self.line_start_offset(line) else {
            return "";
        };
        let start = start as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| (next as usize).saturating_sub(1));
        source.get(start..end).unwrap_or("").trim_end_matches('\r')
    }

    /// Get the number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
