//! Driver plumbing for the `vela` binary.
//!
//! The binary stays thin: argument dispatch lives in `main.rs`, and the
//! actual commands live here so they can be exercised by tests. The only
//! command the front-end ships today is `lex`: scan one file and either
//! dump the token stream or render the lexical error.

use std::io::{self, IsTerminal};
use std::sync::Once;

use vela_diagnostic::{ColorMode, Diagnostic, DiagnosticEmitter, ErrorCode, TerminalEmitter};
use vela_lexer::{Dialect, LexError, LexErrorKind, Lexer};
use vela_lexer_core::SourceBuffer;
use vela_types::{Handled, TypeEnv, TypeErrorData};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output for debugging.
///
/// Enable with `RUST_LOG=vela_lexer=debug` or `RUST_LOG=trace`. Does
/// nothing when `RUST_LOG` is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Map a lexical error kind to its diagnostic code.
fn lex_error_code(kind: &LexErrorKind) -> ErrorCode {
    match kind {
        LexErrorKind::UnexpectedChar { .. } => ErrorCode::E0001,
        LexErrorKind::UnterminatedString => ErrorCode::E0002,
        LexErrorKind::UnterminatedChar => ErrorCode::E0003,
        LexErrorKind::UnknownEscape { .. }
        | LexErrorKind::TruncatedEscape
        | LexErrorKind::InvalidUnicodeEscape => ErrorCode::E0004,
        LexErrorKind::UnknownOperator { .. } => ErrorCode::E0005,
        LexErrorKind::UnknownWhitespace { .. } => ErrorCode::E0006,
        LexErrorKind::IntOverflow => ErrorCode::E0007,
    }
}

/// Convert a lexical error into a renderable diagnostic.
pub fn lex_error_to_diagnostic(err: &LexError) -> Diagnostic {
    Diagnostic::error(lex_error_code(&err.kind))
        .with_message(err.kind.to_string())
        .with_label(err.span, "")
}

/// Scan one file and print its token stream, or render the lexical error.
///
/// Returns the process exit code: 0 on success, 1 on any error.
pub fn lex_file(path: &str, dialect: Dialect, color: ColorMode) -> i32 {
    let buffer = match SourceBuffer::from_path(path) {
        Ok(buffer) => buffer,
        Err(err) => {
            eprintln!("error: cannot read `{path}`: {err}");
            return 1;
        }
    };
    let source = buffer.text().to_string();

    match Lexer::new(&buffer, dialect, path).scan() {
        Ok(tokens) => {
            for token in &tokens {
                println!("{token:?}");
            }
            0
        }
        Err(err) => {
            let stderr = io::stderr();
            let is_tty = stderr.is_terminal();
            let mut emitter =
                TerminalEmitter::new(stderr, path, source).with_color_mode(color, is_tty);
            emitter.emit(&lex_error_to_diagnostic(&err));
            emitter.emit_summary(1, 0);
            emitter.flush();
            1
        }
    }
}

/// Render a checker-produced batch of type errors to stderr.
///
/// Wires the diagnostic engine to a terminal emitter over the unit's
/// source text. Always returns the fatal [`Handled`] marker; the caller
/// must abort the unit.
pub fn report_type_errors(
    errors: &[TypeErrorData],
    user_types: &TypeEnv,
    filename: &str,
    source: &str,
    color: ColorMode,
) -> Handled {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    let mut emitter = TerminalEmitter::new(stderr, filename, source).with_color_mode(color, is_tty);
    vela_types::handle(errors, user_types, &mut emitter)
}

/// Print the top-level usage text.
pub fn print_usage() {
    println!("Vela compiler front-end");
    println!();
    println!("Usage: vela <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  lex <file.vela> [options]   Scan a file and print its tokens");
    println!();
    println!("Options:");
    println!("  --dialect=<ascii|extended>  Operator/keyword dialect (default: ascii)");
    println!("  --no-color                  Disable ANSI colors in diagnostics");
}
