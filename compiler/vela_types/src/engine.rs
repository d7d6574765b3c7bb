//! The diagnostic engine.
//!
//! [`handle`] is a terminal sink: it renders every record of a batch in
//! detection order (message plus, where intent allows, a synthesized
//! suggestion) and then unconditionally returns the [`Handled`] fatal
//! marker. There is no continue-after-type-errors path; the caller's only
//! move is to abort the unit.
//!
//! Suggestions are rebuilt source text: initializer expressions arrive
//! from the checker unquoted, and the engine re-quotes them by declared
//! type (`"` for strings, `'` for chars) when it rebuilds a declaration.

use std::fmt;
use std::fmt::Write;

use tracing::trace;
use vela_diagnostic::{Diagnostic, DiagnosticEmitter, Suggestion};
use vela_ir::{Expr, ExprKind, FunDecl, Type, VarDecl};

use crate::{example_of, ErrorNode, TypeEnv, TypeErrorData, TypeErrorKind};

/// Marker that a batch of type errors was rendered and is fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a handled batch is fatal; the caller must abort compilation"]
pub struct Handled {
    /// How many records were rendered.
    pub count: usize,
}

impl fmt::Display for Handled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "compilation halted after {} type error{}",
            self.count,
            if self.count == 1 { "" } else { "s" }
        )
    }
}

impl std::error::Error for Handled {}

/// Render every record in `errors` through `emitter`, then declare the
/// batch fatal.
///
/// Records render in input order; this is "report everything found, then
/// stop", not "stop at the first error". A record whose slots don't match
/// its kind's contract renders a degraded message instead of being
/// skipped, so the batch count always matches the input length.
#[tracing::instrument(level = "debug", skip_all, fields(records = errors.len()))]
pub fn handle<E: DiagnosticEmitter>(
    errors: &[TypeErrorData],
    user_types: &TypeEnv,
    emitter: &mut E,
) -> Handled {
    for data in errors {
        trace!(kind = ?data.kind, span = %data.span, "rendering record");
        let (message, suggestion) = render_record(data, user_types);
        let mut diag = Diagnostic::error(data.kind.code())
            .with_message(message)
            .with_label(data.span, "");
        if let Some(snippet) = suggestion {
            diag = diag.with_suggestion(Suggestion::replacement("suggested fix", snippet));
        }
        emitter.emit(&diag);
    }
    emitter.emit_summary(errors.len(), 0);
    emitter.flush();
    Handled {
        count: errors.len(),
    }
}

fn slot_expr(slot: &Option<ErrorNode>) -> Option<&Expr> {
    slot.as_ref().and_then(ErrorNode::as_expr)
}

fn slot_type(slot: &Option<ErrorNode>) -> Option<&Type> {
    slot.as_ref().and_then(ErrorNode::as_type)
}

fn slot_var_decl(slot: &Option<ErrorNode>) -> Option<&VarDecl> {
    slot.as_ref().and_then(ErrorNode::as_var_decl)
}

fn slot_fun_decl(slot: &Option<ErrorNode>) -> Option<&FunDecl> {
    slot.as_ref().and_then(ErrorNode::as_fun_decl)
}

/// Fallback for a record whose slots don't match its kind's contract.
#[cold]
fn degraded(data: &TypeErrorData) -> (String, Option<String>) {
    (
        format!(
            "type error ({:?}): the checker produced an incomplete record",
            data.kind
        ),
        None,
    )
}

/// Build the `(message, suggestion)` pair for one record.
fn render_record(data: &TypeErrorData, env: &TypeEnv) -> (String, Option<String>) {
    match data.kind {
        TypeErrorKind::BadFieldAccess => {
            let Some(expr) = slot_expr(&data.found) else {
                return degraded(data);
            };
            let ExprKind::FieldAccess { source, field } = &expr.kind else {
                return degraded(data);
            };
            // No suggestion: nothing signals what the user meant to access.
            (
                format!("cannot access field `{field}` of non-record expression `{source}`"),
                None,
            )
        }

        TypeErrorKind::BadForList => {
            let Some(expr) = slot_expr(&data.found) else {
                return degraded(data);
            };
            (
                format!("for loop expression `{expr}` is invalid, it must be a list type"),
                Some(format!("[{expr}]")),
            )
        }

        TypeErrorKind::BadFuncParams => {
            let (Some(call), Some(decl)) =
                (slot_expr(&data.found), slot_fun_decl(&data.expected))
            else {
                return degraded(data);
            };
            let ExprKind::Call { callee, .. } = &call.kind else {
                return degraded(data);
            };
            let args: Vec<String> = decl
                .params
                .iter()
                .map(|param| example_of(&param.ty, env))
                .collect();
            (
                format!("function call `{call}` has an incorrect number of parameters"),
                Some(format!("{callee}({})", args.join(", "))),
            )
        }

        TypeErrorKind::BadNext => (
            "a `next` statement must appear inside a switch case or default body".to_string(),
            None,
        ),

        TypeErrorKind::BadSwitchType => {
            let Some(expr) = slot_expr(&data.found) else {
                return degraded(data);
            };
            (
                "switch expression may not be a record, tuple or reference type".to_string(),
                Some(format!("[{expr}]")),
            )
        }

        TypeErrorKind::DuplicateVariable => {
            let Some(decl) = slot_var_decl(&data.expected) else {
                return degraded(data);
            };
            let mut suggestion = format!("{} {}Copy", decl.ty, decl.name);
            if let Some(init) = &decl.init {
                let quote = match decl.ty {
                    Type::Str => "\"",
                    Type::Char => "'",
                    _ => "",
                };
                let _ = write!(suggestion, " = {quote}{init}{quote}");
            }
            (
                format!("variable with name `{}` has already been declared", decl.name),
                Some(suggestion),
            )
        }

        TypeErrorKind::MissingField => {
            let Some(expr) = slot_expr(&data.found) else {
                return degraded(data);
            };
            let ExprKind::FieldAccess { source, field } = &expr.kind else {
                return degraded(data);
            };
            (
                format!("expression `{source}` does not have field `{field}`"),
                None,
            )
        }

        TypeErrorKind::MissingReturn => {
            let Some(decl) = slot_fun_decl(&data.found) else {
                return degraded(data);
            };
            (
                format!(
                    "non-void function `{}` must return a value of type `{}`",
                    decl.name, decl.ret
                ),
                Some(format!("return {}", example_of(&decl.ret, env))),
            )
        }

        TypeErrorKind::TypeMismatch => {
            let (Some(expected_ty), Some(expr)) =
                (slot_type(&data.found), slot_expr(&data.expected))
            else {
                return degraded(data);
            };
            let Some(actual) = &expr.ty else {
                return degraded(data);
            };
            let category = if matches!(expected_ty, Type::List(_)) {
                "list"
            } else {
                "record"
            };
            (
                format!("`{expr}` has type `{actual}`, expected an instance of a {category} type"),
                Some(example_of(expected_ty, env)),
            )
        }

        TypeErrorKind::SubtypeMismatch => {
            // Deliberate slot reversal: the found value lives in
            // `expected`, the expected type inside a cast node in `found`.
            let (Some(cast), Some(value)) =
                (slot_expr(&data.found), slot_expr(&data.expected))
            else {
                return degraded(data);
            };
            let ExprKind::Cast { target, .. } = &cast.kind else {
                return degraded(data);
            };
            let Some(actual) = &value.ty else {
                return degraded(data);
            };
            (
                format!(
                    "`{value}` has type `{actual}`, expected `{target}` or a subtype of `{target}`"
                ),
                Some(example_of(target, env)),
            )
        }

        TypeErrorKind::UndeclaredVariable => {
            let Some(expr) = slot_expr(&data.found) else {
                return degraded(data);
            };
            // No suggestion: the intended type is unknowable here.
            (format!("variable `{expr}` has not been declared"), None)
        }

        TypeErrorKind::BadTupleAssign => {
            let (Some(tuple), Some(sub)) = (slot_expr(&data.found), slot_expr(&data.expected))
            else {
                return degraded(data);
            };
            let Some(sub_ty) = &sub.ty else {
                return degraded(data);
            };
            (
                format!("tuple `{tuple}` contains expression `{sub}` that cannot be assigned to"),
                Some(example_of(sub_ty, env)),
            )
        }
    }
}
