//! Tokenizer for the Vela front-end.
//!
//! A hand-rolled forward scanner over a sentinel-terminated
//! [`SourceBuffer`](vela_lexer_core::SourceBuffer). Construction fixes the
//! [`Dialect`]; [`Lexer::scan`] consumes the instance and produces the
//! whole token sequence or the first [`LexError`]. No partial token list
//! survives a failure.
//!
//! ```
//! use vela_lexer::{Dialect, Lexer};
//! use vela_lexer_core::SourceBuffer;
//!
//! let buffer = SourceBuffer::new("while x <= 10:\n");
//! let tokens = Lexer::new(&buffer, Dialect::Ascii, "demo.vela")
//!     .scan()
//!     .unwrap();
//! // while · indent · x · indent · <= · indent · 10 · : · newline
//! assert_eq!(tokens.len(), 9);
//! ```

mod dialect;
mod escape;
mod keywords;
mod lex_error;
mod scanner;

pub use dialect::Dialect;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Lexer;
