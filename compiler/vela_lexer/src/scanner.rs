//! Hand-written forward scanner.
//!
//! One cursor, one pass, no backtracking beyond the fixed one/two-byte
//! lookaheads. The main dispatch classifies the current byte into exactly
//! one class (digit, string quote, char quote, operator start, identifier
//! start, whitespace) and each arm calls a focused method that advances
//! the cursor and pushes the token. Any unclassifiable character aborts
//! the scan.

use tracing::debug;
use vela_ir::{Literal, Span, Token, TokenKind};
use vela_lexer_core::{Cursor, SourceBuffer};

use crate::{escape, keywords, Dialect, LexError};

/// Identifier-start: ASCII letter or `_`.
#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Identifier-continue: ASCII alphanumeric or `_`.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Whitespace bytes the collapsing dialect swallows.
#[inline]
fn is_whitespace_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// The Vela scanner.
///
/// Owns the single mutable cursor into one immutable buffer for the
/// lifetime of one [`scan`](Lexer::scan) call, which consumes the
/// instance; two in-flight scans over the same buffer cannot exist.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    dialect: Dialect,
    filename: String,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a scanner over a buffer. The dialect is fixed here and
    /// cannot change mid-scan.
    pub fn new(buffer: &'a SourceBuffer, dialect: Dialect, filename: impl Into<String>) -> Self {
        Lexer {
            cursor: buffer.cursor(),
            dialect,
            filename: filename.into(),
            tokens: Vec::new(),
        }
    }

    /// The dialect this scanner was constructed with.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Scan the whole buffer into an owned token sequence.
    ///
    /// Fails with the first [`LexError`]; no partial token list is
    /// returned after a failure.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %self.filename, dialect = ?self.dialect))]
    pub fn scan(mut self) -> Result<Vec<Token>, LexError> {
        while !self.cursor.is_eof() {
            self.scan_token()?;
        }
        debug!(tokens = self.tokens.len(), "scan complete");
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), LexError> {
        match self.cursor.current() {
            b'0'..=b'9' => self.scan_number(),
            b'"' => self.scan_string(),
            b'\'' => self.scan_char(),
            b if self.dialect.is_ascii_operator_start(b) => self.scan_operator(),
            b if is_ident_start(b) => {
                self.scan_identifier();
                Ok(())
            }
            b if is_whitespace_byte(b) => self.scan_whitespace(),
            _ => self.scan_other(),
        }
    }

    fn file(&self) -> String {
        self.filename.clone()
    }

    fn push(&mut self, kind: TokenKind, start: u32) {
        let span = Span::new(start, self.cursor.pos());
        let text = self.cursor.slice(start, self.cursor.pos());
        self.tokens.push(Token::new(kind, text, span));
    }

    fn push_with_value(&mut self, kind: TokenKind, start: u32, value: Literal) {
        let span = Span::new(start, self.cursor.pos());
        let text = self.cursor.slice(start, self.cursor.pos());
        self.tokens.push(Token::with_value(kind, text, span, value));
    }

    // ─── Numerics ────────────────────────────────────────────────────────

    /// Scan an integer or real constant.
    ///
    /// After the integral digit run, a `.` needs one further byte of
    /// lookahead: `0..1` is an integer followed by a range operator, so
    /// the first `.` must stay unconsumed.
    fn scan_number(&mut self) -> Result<(), LexError> {
        let start = self.cursor.pos();
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && self.cursor.peek() != b'.' {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            let text = self.cursor.slice_from(start);
            // A digit run around a single dot always parses.
            let value = text.parse::<f64>().unwrap_or_default();
            self.push_with_value(TokenKind::Real, start, Literal::Real(value));
        } else {
            let text = self.cursor.slice_from(start);
            let value = text.parse::<i64>().map_err(|_| {
                LexError::int_overflow(self.file(), Span::new(start, self.cursor.pos()))
            })?;
            self.push_with_value(TokenKind::Int, start, Literal::Int(value));
        }
        Ok(())
    }

    // ─── Character constants ─────────────────────────────────────────────

    fn scan_char(&mut self) -> Result<(), LexError> {
        let start = self.cursor.pos();
        self.cursor.advance(); // opening '

        let value = match self.cursor.current() {
            0 if self.cursor.is_eof() => {
                return Err(LexError::unterminated_char(self.file(), self.cursor.pos()));
            }
            b'\\' => {
                let esc_start = self.cursor.pos();
                self.cursor.advance();
                let esc = self.cursor.current_char().ok_or_else(|| {
                    LexError::unterminated_char(self.filename.clone(), self.cursor.pos())
                })?;
                let decoded = match esc {
                    't' => '\t',
                    'n' => '\n',
                    other => {
                        let span =
                            Span::new(esc_start, self.cursor.pos() + other.len_utf8() as u32);
                        return Err(LexError::unknown_escape(other, self.file(), span));
                    }
                };
                self.cursor.advance(); // the escape letter is one byte
                decoded
            }
            _ => {
                let c = self.cursor.current_char().ok_or_else(|| {
                    LexError::unterminated_char(self.filename.clone(), self.cursor.pos())
                })?;
                self.cursor.advance_char();
                c
            }
        };

        if self.cursor.current() != b'\'' {
            return Err(LexError::unterminated_char(self.file(), self.cursor.pos()));
        }
        self.cursor.advance(); // closing '
        self.push_with_value(TokenKind::Char, start, Literal::Char(value));
        Ok(())
    }

    // ─── String constants ────────────────────────────────────────────────

    /// Scan a string constant: delimit first, decode escapes second.
    ///
    /// The raw scan honors `\"` so an escaped quote does not terminate the
    /// literal; everything between the quotes then goes through
    /// [`escape::decode_string`].
    fn scan_string(&mut self) -> Result<(), LexError> {
        let start = self.cursor.pos();
        self.cursor.advance(); // opening "

        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    break;
                }
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                _ => {
                    // EOF: report at the truncation point.
                    let offset = self.cursor.source_len().saturating_sub(1);
                    return Err(LexError::unterminated_string(self.file(), offset));
                }
            }
        }

        let end = self.cursor.pos();
        let raw = self.cursor.slice(start, end);
        let content = &raw[1..raw.len() - 1];
        let decoded = escape::decode_string(content, start + 1, &self.filename)?;
        self.tokens.push(Token::with_value(
            TokenKind::Str,
            raw,
            Span::new(start, end),
            Literal::Str(decoded),
        ));
        Ok(())
    }

    // ─── Operators ───────────────────────────────────────────────────────

    /// Scan an ASCII operator: greedy longest-match with one byte of
    /// lookahead for the two-byte operators `++ && != == <= >=`.
    fn scan_operator(&mut self) -> Result<(), LexError> {
        let start = self.cursor.pos();
        let (kind, len) = match self.cursor.current() {
            b',' => (TokenKind::Comma, 1),
            b';' => (TokenKind::Semicolon, 1),
            b':' => (TokenKind::Colon, 1),
            b'|' => (TokenKind::Pipe, 1),
            b'(' => (TokenKind::LParen, 1),
            b')' => (TokenKind::RParen, 1),
            b'[' => (TokenKind::LBracket, 1),
            b']' => (TokenKind::RBracket, 1),
            b'{' => (TokenKind::LBrace, 1),
            b'}' => (TokenKind::RBrace, 1),
            b'.' => (TokenKind::Dot, 1),
            b'-' => (TokenKind::Minus, 1),
            b'*' => (TokenKind::Star, 1),
            b'/' => (TokenKind::Slash, 1),
            b'%' => (TokenKind::Percent, 1),
            b'+' if self.cursor.peek() == b'+' => (TokenKind::PlusPlus, 2),
            b'+' => (TokenKind::Plus, 1),
            b'&' if self.cursor.peek() == b'&' => (TokenKind::AndAnd, 2),
            b'!' if self.cursor.peek() == b'=' => (TokenKind::NotEq, 2),
            b'!' => (TokenKind::Bang, 1),
            b'=' if self.cursor.peek() == b'=' => (TokenKind::EqEq, 2),
            b'=' => (TokenKind::Eq, 1),
            b'<' if self.cursor.peek() == b'=' => (TokenKind::LtEq, 2),
            b'<' => (TokenKind::Lt, 1),
            b'>' if self.cursor.peek() == b'=' => (TokenKind::GtEq, 2),
            b'>' => (TokenKind::Gt, 1),
            // `?`, `~`, and a lone `&` are in the operator alphabet but
            // have no operator.
            other => {
                return Err(LexError::unknown_operator(
                    other as char,
                    self.file(),
                    Span::new(start, start + 1),
                ));
            }
        };
        self.cursor.advance_n(len);
        self.push(kind, start);
        Ok(())
    }

    /// Scan a single Unicode operator code point (extended dialect).
    ///
    /// No lookahead: each mapped code point is a complete operator.
    fn scan_extended_operator(&mut self, ch: char) -> Result<(), LexError> {
        let start = self.cursor.pos();
        let kind = match ch {
            '≤' => TokenKind::LtEq,
            '≥' => TokenKind::GtEq,
            '∧' => TokenKind::AndAnd,
            '∨' => TokenKind::OrOr,
            other => {
                let span = Span::new(start, start + other.len_utf8() as u32);
                return Err(LexError::unknown_operator(other, self.file(), span));
            }
        };
        self.cursor.advance_char();
        self.push(kind, start);
        Ok(())
    }

    // ─── Identifiers ─────────────────────────────────────────────────────

    fn scan_identifier(&mut self) {
        let start = self.cursor.pos();
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        let kind = keywords::lookup(text, self.dialect).unwrap_or(TokenKind::Ident);
        self.push(kind, start);
    }

    // ─── Whitespace ──────────────────────────────────────────────────────

    /// Whitespace per dialect policy: the ASCII dialect emits layout
    /// tokens (`Indent` for space/tab runs, `Newline` for `\n`/`\r\n`),
    /// since layout delimits statement blocks downstream; the extended
    /// dialect collapses everything silently.
    fn scan_whitespace(&mut self) -> Result<(), LexError> {
        if !self.dialect.emits_layout() {
            self.cursor.eat_while(is_whitespace_byte);
            return Ok(());
        }

        let start = self.cursor.pos();
        match self.cursor.current() {
            b' ' | b'\t' => {
                self.cursor.eat_whitespace();
                self.push(TokenKind::Indent, start);
            }
            b'\n' => {
                self.cursor.advance();
                self.push(TokenKind::Newline, start);
            }
            b'\r' if self.cursor.peek() == b'\n' => {
                self.cursor.advance_n(2);
                self.push(TokenKind::Newline, start);
            }
            other => {
                return Err(LexError::unknown_whitespace(
                    other as char,
                    self.file(),
                    Span::new(start, start + 1),
                ));
            }
        }
        Ok(())
    }

    // ─── Everything else ─────────────────────────────────────────────────

    /// Non-ASCII characters and ASCII bytes outside every token class.
    /// The extended dialect's Unicode operators are recognized here; any
    /// other character is a lexical error.
    fn scan_other(&mut self) -> Result<(), LexError> {
        let start = self.cursor.pos();
        let Some(ch) = self.cursor.current_char() else {
            return Err(LexError::unexpected_char(
                '\0',
                self.file(),
                Span::new(start, start + 1),
            ));
        };
        if self.dialect.is_unicode_operator_start(ch) {
            return self.scan_extended_operator(ch);
        }
        let span = Span::new(start, start + ch.len_utf8() as u32);
        Err(LexError::unexpected_char(ch, self.file(), span))
    }
}

#[cfg(test)]
mod tests;
