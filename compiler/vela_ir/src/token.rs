//! Token types for the Vela tokenizer.
//!
//! One tagged token struct carries a kind discriminant, the source lexeme,
//! its span, and (for constant tokens) the decoded literal payload. Tokens
//! are immutable once produced: the tokenizer builds an owned sequence and
//! hands it to the parser wholesale.

use super::Span;
use std::fmt;

/// A token with its lexeme and span in the source.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The lexeme exactly as written in the source.
    pub text: String,
    pub span: Span,
    /// Decoded payload for constant tokens, `None` for everything else.
    pub value: Option<Literal>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
            value: None,
        }
    }

    /// Create a constant token carrying its decoded value.
    pub fn with_value(kind: TokenKind, text: impl Into<String>, span: Span, value: Literal) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
            value: Some(value),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

/// Decoded value of a constant token.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Integer constant: `42`.
    Int(i64),
    /// Real constant: `0.1`.
    Real(f64),
    /// Character constant with escapes resolved: `'\n'`.
    Char(char),
    /// String constant with escapes resolved: `"a\tb"`.
    Str(String),
}

/// Token kinds for Vela.
///
/// A closed enumeration: identifiers, keywords (the extended dialect adds
/// six more), literal kinds, symbols, and the layout tokens the
/// ASCII dialect emits for statement-block structure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Identifier: any name that is not a keyword.
    Ident,

    // Keywords (both dialects)
    IntType,   // int
    RealType,  // real
    CharType,  // char
    StrType,   // string
    BoolType,  // bool
    If,
    Else,
    Switch,
    While,
    For,
    Print,
    Return,
    Constant,
    Type,

    // Keywords (extended dialect only)
    True,
    False,
    Null,
    Void,
    Is,
    Debug,

    // Literal kinds (decoded payload in `Token::value`)
    Int,
    Real,
    Char,
    Str,

    // Symbols
    Comma,     // ,
    Semicolon, // ;
    Colon,     // :
    Pipe,      // |
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    LBrace,    // {
    RBrace,    // }
    Lt,        // <
    Gt,        // >
    Plus,      // +
    PlusPlus,  // ++
    Minus,     // -
    Star,      // *
    Slash,     // /
    Percent,   // %
    Bang,      // !
    Dot,       // .
    Eq,        // =
    EqEq,      // ==
    NotEq,     // !=
    LtEq,      // <= or ≤
    GtEq,      // >= or ≥
    AndAnd,    // && or ∧
    OrOr,      // ∨

    // Layout (ASCII dialect only)
    Newline,
    Indent,
}

impl TokenKind {
    /// Check if this kind is a keyword.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::IntType
                | TokenKind::RealType
                | TokenKind::CharType
                | TokenKind::StrType
                | TokenKind::BoolType
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Switch
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Constant
                | TokenKind::Type
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::Void
                | TokenKind::Is
                | TokenKind::Debug
        )
    }

    /// Check if this kind is a constant token (carries a `Literal`).
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Real | TokenKind::Char | TokenKind::Str
        )
    }
}
