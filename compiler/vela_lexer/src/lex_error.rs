//! Lexical error types.
//!
//! A lexical error aborts the whole scan: the tokenizer returns it in
//! place of the token list, and nothing downstream sees partial output.
//! Each error carries the filename and the byte span of the offending
//! input. Final rendering maps these to `vela_diagnostic::Diagnostic` in
//! the driver.

use std::fmt;
use vela_ir::Span;

/// A lexical error: what went wrong, in which file, at which offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// The compilation unit being scanned.
    pub filename: String,
    /// WHERE the error occurred.
    pub span: Span,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that starts no token class at all.
    UnexpectedChar { ch: char },
    /// Missing closing `"` for a string literal.
    UnterminatedString,
    /// Missing closing `'` for a character literal.
    UnterminatedChar,
    /// Unsupported escape after `\` (e.g. `\q`).
    UnknownEscape { escape: char },
    /// A `\` with no characters after it inside a string literal.
    TruncatedEscape,
    /// Malformed `\uXXXX` escape: wrong digit count, bad hex, or a value
    /// that is not a Unicode scalar.
    InvalidUnicodeEscape,
    /// An operator-start character with no operator mapping.
    UnknownOperator { ch: char },
    /// A whitespace character the layout dialect cannot classify.
    UnknownWhitespace { ch: char },
    /// Integer literal does not fit the value representation.
    IntOverflow,
}

impl LexError {
    fn new(kind: LexErrorKind, filename: impl Into<String>, span: Span) -> Self {
        LexError {
            kind,
            filename: filename.into(),
            span,
        }
    }

    /// Create an unexpected-character error.
    #[cold]
    pub fn unexpected_char(ch: char, filename: impl Into<String>, span: Span) -> Self {
        Self::new(LexErrorKind::UnexpectedChar { ch }, filename, span)
    }

    /// Create an unterminated-string error at the truncation point.
    #[cold]
    pub fn unterminated_string(filename: impl Into<String>, offset: u32) -> Self {
        Self::new(
            LexErrorKind::UnterminatedString,
            filename,
            Span::point(offset),
        )
    }

    /// Create an unterminated-character error.
    #[cold]
    pub fn unterminated_char(filename: impl Into<String>, offset: u32) -> Self {
        Self::new(LexErrorKind::UnterminatedChar, filename, Span::point(offset))
    }

    /// Create an unknown-escape error anchored at the escape.
    #[cold]
    pub fn unknown_escape(escape: char, filename: impl Into<String>, span: Span) -> Self {
        Self::new(LexErrorKind::UnknownEscape { escape }, filename, span)
    }

    /// Create a truncated-escape error.
    #[cold]
    pub fn truncated_escape(filename: impl Into<String>, span: Span) -> Self {
        Self::new(LexErrorKind::TruncatedEscape, filename, span)
    }

    /// Create an invalid `\uXXXX` escape error.
    #[cold]
    pub fn invalid_unicode_escape(filename: impl Into<String>, span: Span) -> Self {
        Self::new(LexErrorKind::InvalidUnicodeEscape, filename, span)
    }

    /// Create an unknown-operator error naming the offending character.
    #[cold]
    pub fn unknown_operator(ch: char, filename: impl Into<String>, span: Span) -> Self {
        Self::new(LexErrorKind::UnknownOperator { ch }, filename, span)
    }

    /// Create an unknown-whitespace error.
    #[cold]
    pub fn unknown_whitespace(ch: char, filename: impl Into<String>, span: Span) -> Self {
        Self::new(LexErrorKind::UnknownWhitespace { ch }, filename, span)
    }

    /// Create an integer-overflow error spanning the digits.
    #[cold]
    pub fn int_overflow(filename: impl Into<String>, span: Span) -> Self {
        Self::new(LexErrorKind::IntOverflow, filename, span)
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnexpectedChar { ch } => {
                write!(f, "unexpected character `{}`", ch.escape_default())
            }
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::UnterminatedChar => write!(f, "unterminated character literal"),
            LexErrorKind::UnknownEscape { escape } => {
                write!(f, "unknown escape character `\\{}`", escape.escape_default())
            }
            LexErrorKind::TruncatedEscape => {
                write!(f, "escape sequence is missing its escaped character")
            }
            LexErrorKind::InvalidUnicodeEscape => {
                write!(f, "`\\u` escape requires exactly 4 hex digits")
            }
            LexErrorKind::UnknownOperator { ch } => {
                write!(f, "unknown operator `{ch}`")
            }
            LexErrorKind::UnknownWhitespace { ch } => {
                write!(f, "unknown whitespace character `{}`", ch.escape_default())
            }
            LexErrorKind::IntOverflow => write!(f, "integer literal is too large"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.filename, self.span, self.kind)
    }
}

impl std::error::Error for LexError {}
