//! Structured type-error records.
//!
//! One [`TypeErrorData`] is created per semantic error the checker
//! detects, consumed exactly once by [`engine::handle`](crate::engine::handle),
//! then discarded. The `found`/`expected` slots are polymorphic: their
//! interpretation is fixed per [`TypeErrorKind`], not a generic pair.
//!
//! # The kind-indexed slot contract
//!
//! | Kind | `found` holds | `expected` holds |
//! |---|---|---|
//! | `BadFieldAccess` | field-access expression | — |
//! | `BadForList` | the loop-source expression | — |
//! | `BadFuncParams` | the call expression | the matching function declaration |
//! | `BadNext` | — | — |
//! | `BadSwitchType` | the switch expression | — |
//! | `DuplicateVariable` | the declared type | the duplicate declaration statement |
//! | `MissingField` | field-access expression | — |
//! | `MissingReturn` | the function declaration | — |
//! | `TypeMismatch` | the expected type | the mismatching expression |
//! | `SubtypeMismatch` | expected type inside a synthetic cast | the found expression |
//! | `UndeclaredVariable` | the referencing expression | — |
//! | `BadTupleAssign` | the containing tuple expression | the unassignable sub-expression |
//!
//! `SubtypeMismatch` deliberately reuses the slots backwards: the checker
//! stores the *found* value in `expected` and packs the *expected* type
//! inside a cast node in `found`. Callers rely on this exact layout; do
//! not "fix" it.

use vela_diagnostic::ErrorCode;
use vela_ir::{Expr, FunDecl, Span, Type, VarDecl};

/// A node carried in a `found`/`expected` slot.
///
/// Which variant a slot holds is dictated by the record's
/// [`TypeErrorKind`] (see the module-level table).
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorNode {
    Expr(Expr),
    Type(Type),
    VarDecl(VarDecl),
    FunDecl(FunDecl),
}

impl ErrorNode {
    /// View as an expression, if the slot holds one.
    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            ErrorNode::Expr(e) => Some(e),
            _ => None,
        }
    }

    /// View as a type, if the slot holds one.
    pub fn as_type(&self) -> Option<&Type> {
        match self {
            ErrorNode::Type(t) => Some(t),
            _ => None,
        }
    }

    /// View as a variable declaration, if the slot holds one.
    pub fn as_var_decl(&self) -> Option<&VarDecl> {
        match self {
            ErrorNode::VarDecl(d) => Some(d),
            _ => None,
        }
    }

    /// View as a function declaration, if the slot holds one.
    pub fn as_fun_decl(&self) -> Option<&FunDecl> {
        match self {
            ErrorNode::FunDecl(d) => Some(d),
            _ => None,
        }
    }
}

/// The closed set of semantic error kinds the checker reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeErrorKind {
    /// Accessing a field of a non-record value.
    BadFieldAccess,
    /// For-loop source is not a list type.
    BadForList,
    /// Call with the wrong argument count.
    BadFuncParams,
    /// A `next` control statement outside a switch arm.
    BadNext,
    /// Switch scrutinee is a record, tuple or reference.
    BadSwitchType,
    /// Name collision between declarations.
    DuplicateVariable,
    /// Record lacks the named field.
    MissingField,
    /// Non-void function may fall through without returning.
    MissingReturn,
    /// Expression's type doesn't match a composite expectation.
    TypeMismatch,
    /// Expression's type is not the expected type or a subtype of it.
    SubtypeMismatch,
    /// Variable never declared.
    UndeclaredVariable,
    /// Illegal assignment target inside a tuple pattern.
    BadTupleAssign,
}

impl TypeErrorKind {
    /// The diagnostic code this kind renders under.
    pub fn code(self) -> ErrorCode {
        match self {
            TypeErrorKind::BadFieldAccess => ErrorCode::E2001,
            TypeErrorKind::BadForList => ErrorCode::E2002,
            TypeErrorKind::BadFuncParams => ErrorCode::E2003,
            TypeErrorKind::BadNext => ErrorCode::E2004,
            TypeErrorKind::BadSwitchType => ErrorCode::E2005,
            TypeErrorKind::DuplicateVariable => ErrorCode::E2006,
            TypeErrorKind::MissingField => ErrorCode::E2007,
            TypeErrorKind::MissingReturn => ErrorCode::E2008,
            TypeErrorKind::TypeMismatch => ErrorCode::E2009,
            TypeErrorKind::SubtypeMismatch => ErrorCode::E2010,
            TypeErrorKind::UndeclaredVariable => ErrorCode::E2011,
            TypeErrorKind::BadTupleAssign => ErrorCode::E2012,
        }
    }
}

/// One semantic error record.
///
/// Lifecycle: created by the checker, rendered once by the engine,
/// discarded. Nothing is persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeErrorData {
    pub kind: TypeErrorKind,
    /// Kind-dependent slot; see the module-level table.
    pub found: Option<ErrorNode>,
    /// Kind-dependent slot; see the module-level table.
    pub expected: Option<ErrorNode>,
    /// The compilation unit the error was found in.
    pub filename: String,
    /// Where the error anchors in the source.
    pub span: Span,
}

impl TypeErrorData {
    /// Create a record with empty slots.
    pub fn new(kind: TypeErrorKind, filename: impl Into<String>, span: Span) -> Self {
        TypeErrorData {
            kind,
            found: None,
            expected: None,
            filename: filename.into(),
            span,
        }
    }

    /// Fill the `found` slot.
    #[must_use]
    pub fn with_found(mut self, node: ErrorNode) -> Self {
        self.found = Some(node);
        self
    }

    /// Fill the `expected` slot.
    #[must_use]
    pub fn with_expected(mut self, node: ErrorNode) -> Self {
        self.expected = Some(node);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_fills_slots() {
        let data = TypeErrorData::new(TypeErrorKind::BadForList, "demo.vela", Span::new(4, 9))
            .with_found(ErrorNode::Expr(Expr::var("xs", Span::new(4, 6))));
        assert_eq!(data.kind, TypeErrorKind::BadForList);
        assert!(data.found.is_some());
        assert!(data.expected.is_none());
    }

    #[test]
    fn node_accessors() {
        let node = ErrorNode::Type(Type::Int);
        assert_eq!(node.as_type(), Some(&Type::Int));
        assert_eq!(node.as_expr(), None);
        assert_eq!(node.as_var_decl(), None);
        assert_eq!(node.as_fun_decl(), None);
    }

    #[test]
    fn every_kind_has_a_code() {
        let kinds = [
            TypeErrorKind::BadFieldAccess,
            TypeErrorKind::BadForList,
            TypeErrorKind::BadFuncParams,
            TypeErrorKind::BadNext,
            TypeErrorKind::BadSwitchType,
            TypeErrorKind::DuplicateVariable,
            TypeErrorKind::MissingField,
            TypeErrorKind::MissingReturn,
            TypeErrorKind::TypeMismatch,
            TypeErrorKind::SubtypeMismatch,
            TypeErrorKind::UndeclaredVariable,
            TypeErrorKind::BadTupleAssign,
        ];
        let codes: std::collections::HashSet<_> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), kinds.len(), "codes must be distinct per kind");
    }
}
