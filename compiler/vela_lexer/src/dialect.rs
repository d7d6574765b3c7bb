//! Tokenizer dialect configuration.
//!
//! One scanner serves two surface syntaxes. The dialects differ in three
//! places only: the operator-start alphabet, the extra keyword set, and the
//! whitespace policy. Numeric scanning, literals, and identifiers are
//! shared.

/// The dialect a [`Lexer`](crate::Lexer) is constructed with. Fixed for the
/// lifetime of the scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialect {
    /// ASCII-only operators; layout is significant, so the scanner emits
    /// `Newline` and `Indent` tokens for the parser's block structure.
    #[default]
    Ascii,
    /// Admits direct Unicode mathematical-operator code points and six
    /// extra keywords; all whitespace is collapsed silently.
    Extended,
}

/// Unicode operator-start code points admitted by the extended dialect.
///
/// Only `≤ ≥ ∧ ∨` map to tokens; the set-theoretic characters are part of
/// the operator alphabet but have no operator yet, so scanning them raises
/// "unknown operator".
const UNICODE_OPERATOR_STARTS: [char; 14] = [
    '∀', // U+2200 FOR ALL
    '∃', // U+2203 THERE EXISTS
    '∅', // U+2205 EMPTY SET
    '⊂', // U+2282 SUBSET OF
    '⊆', // U+2286 SUBSET OF OR EQUAL TO
    '⊃', // U+2283 SUPERSET OF
    '⊇', // U+2287 SUPERSET OF OR EQUAL TO
    '∪', // U+222A UNION
    '∩', // U+2229 INTERSECTION
    '≤', // U+2264 LESS-THAN OR EQUAL TO
    '≥', // U+2265 GREATER-THAN OR EQUAL TO
    '∈', // U+2208 ELEMENT OF
    '∧', // U+2227 LOGICAL AND
    '∨', // U+2228 LOGICAL OR
];

impl Dialect {
    /// Check if an ASCII byte starts an operator. Identical across
    /// dialects.
    pub fn is_ascii_operator_start(self, byte: u8) -> bool {
        matches!(
            byte,
            b',' | b'('
                | b')'
                | b'['
                | b']'
                | b'{'
                | b'}'
                | b'+'
                | b'-'
                | b'*'
                | b'/'
                | b'%'
                | b'!'
                | b'?'
                | b'='
                | b'<'
                | b'>'
                | b':'
                | b';'
                | b'&'
                | b'|'
                | b'.'
                | b'~'
        )
    }

    /// Check if a non-ASCII character starts an operator. Always false in
    /// the ASCII dialect.
    pub fn is_unicode_operator_start(self, ch: char) -> bool {
        matches!(self, Dialect::Extended) && UNICODE_OPERATOR_STARTS.contains(&ch)
    }

    /// Whether the scanner emits `Newline`/`Indent` layout tokens instead
    /// of collapsing whitespace.
    pub fn emits_layout(self) -> bool {
        matches!(self, Dialect::Ascii)
    }

    /// Whether the six extra keywords (`true false null void is debug`)
    /// are reserved.
    pub fn has_extended_keywords(self) -> bool {
        matches!(self, Dialect::Extended)
    }
}
