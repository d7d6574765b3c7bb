use super::*;
use crate::LexErrorKind;
use pretty_assertions::assert_eq;

fn scan(src: &str, dialect: Dialect) -> Result<Vec<Token>, LexError> {
    let buffer = SourceBuffer::new(src);
    Lexer::new(&buffer, dialect, "test.vela").scan()
}

fn kinds(src: &str, dialect: Dialect) -> Vec<TokenKind> {
    match scan(src, dialect) {
        Ok(tokens) => tokens.iter().map(|t| t.kind).collect(),
        Err(err) => panic!("scan failed: {err}"),
    }
}

fn scan_err(src: &str, dialect: Dialect) -> LexError {
    match scan(src, dialect) {
        Ok(tokens) => panic!("expected a lexical error, got {tokens:?}"),
        Err(err) => err,
    }
}

// ─── Numerics ────────────────────────────────────────────────────────────

#[test]
fn integer_spans_full_text() {
    let tokens = match scan("12345", Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].text, "12345");
    assert_eq!(tokens[0].span, Span::new(0, 5));
    assert_eq!(tokens[0].value, Some(Literal::Int(12345)));
}

#[test]
fn real_spans_full_text() {
    let tokens = match scan("3.14", Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Real);
    assert_eq!(tokens[0].span, Span::new(0, 4));
    assert_eq!(tokens[0].value, Some(Literal::Real(3.14)));
}

#[test]
fn range_does_not_consume_first_dot() {
    let tokens = match scan("0..1", Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    let ks: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        ks,
        [TokenKind::Int, TokenKind::Dot, TokenKind::Dot, TokenKind::Int]
    );
    assert_eq!(tokens[0].text, "0");
    assert_eq!(tokens[0].span, Span::new(0, 1));
    assert_eq!(tokens[3].text, "1");
}

#[test]
fn multi_digit_range() {
    assert_eq!(
        kinds("10..25", Dialect::Extended),
        [TokenKind::Int, TokenKind::Dot, TokenKind::Dot, TokenKind::Int]
    );
}

#[test]
fn trailing_dot_is_a_real() {
    let tokens = match scan("1.", Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Real);
    assert_eq!(tokens[0].value, Some(Literal::Real(1.0)));
}

#[test]
fn integer_overflow_is_a_lexical_error() {
    let err = scan_err("9999999999999999999999", Dialect::Extended);
    assert_eq!(err.kind, LexErrorKind::IntOverflow);
    assert_eq!(err.span, Span::new(0, 22));
}

// ─── Character constants ─────────────────────────────────────────────────

#[test]
fn char_constant() {
    let tokens = match scan("'c'", Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens[0].kind, TokenKind::Char);
    assert_eq!(tokens[0].text, "'c'");
    assert_eq!(tokens[0].value, Some(Literal::Char('c')));
}

#[test]
fn char_escapes() {
    let tokens = match scan(r"'\n' '\t'", Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens[0].value, Some(Literal::Char('\n')));
    assert_eq!(tokens[1].value, Some(Literal::Char('\t')));
}

#[test]
fn char_unknown_escape_rejected() {
    let err = scan_err(r"'\r'", Dialect::Extended);
    assert_eq!(err.kind, LexErrorKind::UnknownEscape { escape: 'r' });
}

#[test]
fn char_missing_close_quote() {
    let err = scan_err("'a", Dialect::Extended);
    assert_eq!(err.kind, LexErrorKind::UnterminatedChar);
    assert_eq!(err.span, Span::point(2));
}

#[test]
fn char_with_two_characters_rejected() {
    let err = scan_err("'ab'", Dialect::Extended);
    assert_eq!(err.kind, LexErrorKind::UnterminatedChar);
}

#[test]
fn multibyte_char_constant() {
    let tokens = match scan("'é'", Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens[0].value, Some(Literal::Char('é')));
}

// ─── String constants ────────────────────────────────────────────────────

#[test]
fn string_constant_keeps_raw_lexeme() {
    let tokens = match scan(r#""hello""#, Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].text, r#""hello""#);
    assert_eq!(tokens[0].value, Some(Literal::Str("hello".to_string())));
    assert_eq!(tokens[0].span, Span::new(0, 7));
}

#[test]
fn string_escapes_decode_in_second_pass() {
    let tokens = match scan(r#""a\tb\nc""#, Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens[0].value, Some(Literal::Str("a\tb\nc".to_string())));
}

#[test]
fn escaped_quote_does_not_terminate() {
    let tokens = match scan(r#""a\"b""#, Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, Some(Literal::Str("a\"b".to_string())));
}

#[test]
fn unterminated_string_reports_truncation_point() {
    let err = scan_err(r#""abc"#, Dialect::Extended);
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::point(3));
}

#[test]
fn string_unknown_escape_at_offset() {
    let err = scan_err(r#"  "a\qb""#, Dialect::Extended);
    assert_eq!(err.kind, LexErrorKind::UnknownEscape { escape: 'q' });
    assert_eq!(err.span, Span::new(4, 6));
}

#[test]
fn empty_string() {
    let tokens = match scan(r#""""#, Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens[0].value, Some(Literal::Str(String::new())));
}

// ─── Operators ───────────────────────────────────────────────────────────

#[test]
fn two_byte_operators_are_greedy() {
    assert_eq!(kinds("==", Dialect::Extended), [TokenKind::EqEq]);
    assert_eq!(kinds("++", Dialect::Extended), [TokenKind::PlusPlus]);
    assert_eq!(kinds("!=", Dialect::Extended), [TokenKind::NotEq]);
    assert_eq!(kinds("<=", Dialect::Extended), [TokenKind::LtEq]);
    assert_eq!(kinds(">=", Dialect::Extended), [TokenKind::GtEq]);
    assert_eq!(kinds("&&", Dialect::Extended), [TokenKind::AndAnd]);
}

#[test]
fn single_byte_operators() {
    assert_eq!(
        kinds("(x)=y<z", Dialect::Extended),
        [
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::Eq,
            TokenKind::Ident,
            TokenKind::Lt,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn plus_then_nonplus_is_plus() {
    assert_eq!(
        kinds("1+2", Dialect::Extended),
        [TokenKind::Int, TokenKind::Plus, TokenKind::Int]
    );
}

#[test]
fn unmapped_operator_starts_error() {
    for src in ["?", "~", "&"] {
        let err = scan_err(src, Dialect::Extended);
        assert!(
            matches!(err.kind, LexErrorKind::UnknownOperator { .. }),
            "`{src}` should be an unknown operator, got {:?}",
            err.kind
        );
    }
}

#[test]
fn unknown_operator_names_the_character() {
    let err = scan_err("x ? y", Dialect::Extended);
    assert_eq!(err.kind, LexErrorKind::UnknownOperator { ch: '?' });
    assert_eq!(err.span, Span::new(2, 3));
}

// ─── Extended Unicode operators ──────────────────────────────────────────

#[test]
fn unicode_relational_operators() {
    assert_eq!(
        kinds("a≤b", Dialect::Extended),
        [TokenKind::Ident, TokenKind::LtEq, TokenKind::Ident]
    );
    assert_eq!(
        kinds("a≥b", Dialect::Extended),
        [TokenKind::Ident, TokenKind::GtEq, TokenKind::Ident]
    );
}

#[test]
fn unicode_logical_operators() {
    assert_eq!(
        kinds("p∧q", Dialect::Extended),
        [TokenKind::Ident, TokenKind::AndAnd, TokenKind::Ident]
    );
    assert_eq!(
        kinds("p∨q", Dialect::Extended),
        [TokenKind::Ident, TokenKind::OrOr, TokenKind::Ident]
    );
}

#[test]
fn unicode_operator_spans_cover_all_bytes() {
    let tokens = match scan("a≤b", Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens[1].span, Span::new(1, 4)); // ≤ is 3 bytes
    assert_eq!(tokens[1].text, "≤");
}

#[test]
fn set_theoretic_code_points_are_unknown_operators() {
    for src in ["∀", "∃", "∅", "⊂", "⊆", "⊃", "⊇", "∪", "∩", "∈"] {
        let err = scan_err(src, Dialect::Extended);
        assert!(
            matches!(err.kind, LexErrorKind::UnknownOperator { .. }),
            "`{src}` should be an unknown operator"
        );
    }
}

#[test]
fn unicode_operators_rejected_in_ascii_dialect() {
    let err = scan_err("a ≤ b", Dialect::Ascii);
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar { ch: '≤' });
    assert_eq!(err.span, Span::new(2, 5));
}

// ─── Identifiers and keywords ────────────────────────────────────────────

#[test]
fn identifiers_and_keywords() {
    assert_eq!(
        kinds("while count_2 returns", Dialect::Extended),
        [TokenKind::While, TokenKind::Ident, TokenKind::Ident]
    );
}

#[test]
fn extended_keywords_by_dialect() {
    assert_eq!(kinds("true", Dialect::Extended), [TokenKind::True]);
    assert_eq!(kinds("true", Dialect::Ascii), [TokenKind::Ident]);
    assert_eq!(kinds("void", Dialect::Extended), [TokenKind::Void]);
}

#[test]
fn underscore_starts_identifier() {
    let tokens = match scan("_tmp", Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].text, "_tmp");
}

// ─── Whitespace ──────────────────────────────────────────────────────────

#[test]
fn ascii_dialect_emits_layout_tokens() {
    assert_eq!(
        kinds("a\n  b", Dialect::Ascii),
        [
            TokenKind::Ident,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Ident,
        ]
    );
}

#[test]
fn crlf_is_one_newline_token() {
    let tokens = match scan("a\r\nb", Dialect::Ascii) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens[1].kind, TokenKind::Newline);
    assert_eq!(tokens[1].span, Span::new(1, 3));
}

#[test]
fn indent_is_a_maximal_run() {
    let tokens = match scan("\t  \tx", Dialect::Ascii) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(tokens[0].kind, TokenKind::Indent);
    assert_eq!(tokens[0].text, "\t  \t");
}

#[test]
fn formfeed_rejected_by_layout_dialect() {
    let err = scan_err("a\x0Cb", Dialect::Ascii);
    assert_eq!(err.kind, LexErrorKind::UnknownWhitespace { ch: '\x0C' });
}

#[test]
fn extended_dialect_collapses_whitespace() {
    assert_eq!(
        kinds("a \t\r\n\x0C b", Dialect::Extended),
        [TokenKind::Ident, TokenKind::Ident]
    );
}

// ─── Errors ──────────────────────────────────────────────────────────────

#[test]
fn unclassifiable_character() {
    let err = scan_err("let #x", Dialect::Extended);
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar { ch: '#' });
    assert_eq!(err.span, Span::new(4, 5));
    assert_eq!(err.filename, "test.vela");
}

#[test]
fn no_partial_tokens_after_failure() {
    // The error swallows the whole scan, not just the bad token.
    assert!(scan("x = 1 ? 2", Dialect::Extended).is_err());
}

// ─── Whole programs ──────────────────────────────────────────────────────

#[test]
fn empty_input_scans_to_nothing() {
    assert!(kinds("", Dialect::Ascii).is_empty());
    assert!(kinds("", Dialect::Extended).is_empty());
}

#[test]
fn small_program_ascii_dialect() {
    let src = "int x = 5\nwhile x <= 10:\n\tx = x + 1\n";
    let tokens = match scan(src, Dialect::Ascii) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    // Spot-check structure instead of the full 20+ token dump.
    assert_eq!(tokens[0].kind, TokenKind::IntType);
    assert!(tokens.iter().any(|t| t.kind == TokenKind::LtEq));
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::Newline).count(),
        3
    );
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Indent));
}

#[test]
fn small_program_extended_dialect() {
    let src = "if x ≥ 0 ∧ y ≤ 9:\n\treturn true\n";
    let tokens = match scan(src, Dialect::Extended) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    let ks: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        ks,
        [
            TokenKind::If,
            TokenKind::Ident,
            TokenKind::GtEq,
            TokenKind::Int,
            TokenKind::AndAnd,
            TokenKind::Ident,
            TokenKind::LtEq,
            TokenKind::Int,
            TokenKind::Colon,
            TokenKind::Return,
            TokenKind::True,
        ]
    );
}
