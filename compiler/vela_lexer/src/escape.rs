//! Second-pass escape decoding for string literals.
//!
//! The scanner first delimits the raw literal, then this pass walks the
//! content between the quotes and replaces each escape with its decoded
//! character. Valid escapes: `\b \t \n \f \r \" \' \\` and `\uXXXX` with
//! exactly 4 hex digits. Anything else after `\` aborts the scan with an
//! error anchored at the escape.

use crate::lex_error::LexError;
use vela_ir::Span;

/// Decode a string literal's content (between the `"`s).
///
/// `base_offset` is the byte offset of `content` in the source, used to
/// anchor escape errors precisely.
#[allow(
    clippy::cast_possible_truncation,
    reason = "source offsets are bounded by u32 throughout the front-end"
)]
pub(crate) fn decode_string(
    content: &str,
    base_offset: u32,
    filename: &str,
) -> Result<String, LexError> {
    // Fast path: nothing to decode.
    if !content.contains('\\') {
        return Ok(content.to_string());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let esc_start = base_offset + i as u32;
        match chars.next() {
            Some((_, 'b')) => result.push('\u{0008}'),
            Some((_, 't')) => result.push('\t'),
            Some((_, 'n')) => result.push('\n'),
            Some((_, 'f')) => result.push('\u{000C}'),
            Some((_, 'r')) => result.push('\r'),
            Some((_, '"')) => result.push('"'),
            Some((_, '\'')) => result.push('\''),
            Some((_, '\\')) => result.push('\\'),
            Some((j, 'u')) => {
                let digits_start = j + 1;
                let digits = content.get(digits_start..digits_start + 4);
                let span = Span::new(
                    esc_start,
                    base_offset + (digits_start + 4).min(content.len()) as u32,
                );
                let decoded = digits
                    .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()))
                    .and_then(|d| u32::from_str_radix(d, 16).ok())
                    .and_then(char::from_u32)
                    .ok_or_else(|| LexError::invalid_unicode_escape(filename, span))?;
                result.push(decoded);
                // Skip the 4 digit characters (all ASCII, one byte each).
                for _ in 0..4 {
                    chars.next();
                }
            }
            Some((j, esc)) => {
                let span = Span::new(esc_start, base_offset + (j + esc.len_utf8()) as u32);
                return Err(LexError::unknown_escape(esc, filename, span));
            }
            None => {
                let span = Span::new(esc_start, esc_start + 1);
                return Err(LexError::truncated_escape(filename, span));
            }
        }
    }

    Ok(result)
}
