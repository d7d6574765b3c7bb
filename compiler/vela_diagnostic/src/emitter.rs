//! Terminal emitter.
//!
//! Human-readable diagnostic output with optional ANSI color support. The
//! emitter owns the compilation unit's filename and source text, so every
//! diagnostic is rendered as a source excerpt with the erroring span
//! caret-marked:
//!
//! ```text
//! error[E2011]: variable `x` has not been declared
//!   --> demo.vela:3:9
//!    |
//!  3 | int y = x
//!    |         ^
//! ```
//!
//! A suggestion that carries replacement text gets its own annotated block
//! below the message block; text-only suggestions render as `= help:`
//! lines and a missing suggestion renders nothing.

use std::io::Write;

use vela_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity, Suggestion};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics in order.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Terminal emitter with source excerpts and optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    filename: String,
    source: String,
    table: LineOffsetTable,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create an emitter for one compilation unit, colors off.
    pub fn new(writer: W, filename: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let table = LineOffsetTable::build(&source);
        TerminalEmitter {
            writer,
            filename: filename.into(),
            source,
            table,
            colors: false,
        }
    }

    /// Enable or disable colors from a [`ColorMode`].
    #[must_use]
    pub fn with_color_mode(mut self, mode: ColorMode, is_tty: bool) -> Self {
        self.colors = mode.should_use_colors(is_tty);
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
            Severity::Help => colors::HELP,
        };
        self.write_colored(&severity.to_string(), color);
    }

    /// Render the `--> file:line:col` location line plus the source
    /// excerpt with a caret (`^`) or underline (`-`) marking `span`.
    ///
    /// This is the span-annotation primitive both the tokenizer's errors
    /// and the type-error engine render through.
    fn annotate_span(&mut self, span: Span, marker: char, trailing: &str) {
        let (line, col) = self.table.offset_to_line_col(&self.source, span.start);
        let line_text = self.table.line_text(&self.source, line).to_string();
        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());

        let location = format!("{}:{line}:{col}", self.filename);
        let _ = write!(self.writer, "{pad} ");
        self.write_colored("-->", colors::GUTTER);
        let _ = writeln!(self.writer, " {location}");

        let _ = write!(self.writer, "{pad} ");
        self.write_colored("|", colors::GUTTER);
        let _ = writeln!(self.writer);

        self.write_colored(&gutter, colors::GUTTER);
        let _ = write!(self.writer, " ");
        self.write_colored("|", colors::GUTTER);
        let _ = writeln!(self.writer, " {line_text}");

        // Caret line: mark span chars, clamped to the excerpt line.
        let line_start = self.table.line_start_offset(line).unwrap_or(0) as usize;
        let span_start = (span.start as usize).min(self.source.len());
        let span_end = (span.end as usize)
            .min(line_start + line_text.len())
            .max(span_start);
        let lead = self
            .source
            .get(line_start..span_start)
            .map_or(0, |s| s.chars().count());
        let width = self
            .source
            .get(span_start..span_end)
            .map_or(1, |s| s.chars().count())
            .max(1);

        let _ = write!(self.writer, "{pad} ");
        self.write_colored("|", colors::GUTTER);
        let _ = write!(self.writer, " {}", " ".repeat(lead));
        let underline = marker.to_string().repeat(width);
        let color = if marker == '^' {
            colors::ERROR
        } else {
            colors::GUTTER
        };
        self.write_colored(&underline, color);
        if trailing.is_empty() {
            let _ = writeln!(self.writer);
        } else {
            let _ = writeln!(self.writer, " {trailing}");
        }
    }

    fn emit_label(&mut self, label: &Label) {
        let marker = if label.is_primary { '^' } else { '-' };
        self.annotate_span(label.span, marker, &label.message);
    }

    fn emit_suggestion(&mut self, suggestion: &Suggestion, span: Option<Span>) {
        match (&suggestion.snippet, span) {
            (Some(snippet), Some(span)) => {
                // Snippet suggestions get their own annotated block.
                self.write_severity(Severity::Help);
                let _ = writeln!(self.writer, ": {}: `{snippet}`", suggestion.message);
                self.annotate_span(span, '-', "");
            }
            (Some(snippet), None) => {
                let _ = write!(self.writer, "  = ");
                self.write_severity(Severity::Help);
                let _ = writeln!(self.writer, ": {}: `{snippet}`", suggestion.message);
            }
            (None, _) => {
                let _ = write!(self.writer, "  = ");
                self.write_severity(Severity::Help);
                let _ = writeln!(self.writer, ": {}", suggestion.message);
            }
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        if self.colors {
            let _ = write!(
                self.writer,
                "{}[{}]{}",
                colors::BOLD,
                diagnostic.code,
                colors::RESET
            );
        } else {
            let _ = write!(self.writer, "[{}]", diagnostic.code);
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.emit_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_severity(Severity::Note);
            let _ = writeln!(self.writer, ": {note}");
        }

        let primary = diagnostic.primary_span();
        for suggestion in &diagnostic.suggestions {
            self.emit_suggestion(suggestion, primary);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_severity(Severity::Error);
            let _ = writeln!(
                self.writer,
                ": aborting due to {error_count} previous error{}",
                plural_s(error_count)
            );
        } else if warning_count > 0 {
            self.write_severity(Severity::Warning);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
