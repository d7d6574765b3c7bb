//! Low-level scanning primitives for the Vela tokenizer.
//!
//! [`SourceBuffer`] materializes one compilation unit as a
//! sentinel-terminated byte buffer; [`Cursor`] is the single forward
//! position the scanner moves through it. This crate knows nothing about
//! Vela's grammar; token classification lives in `vela_lexer`.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
