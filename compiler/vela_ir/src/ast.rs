//! Minimal AST nodes referenced by type-error records.
//!
//! The parser that builds the full tree is an external collaborator; the
//! diagnostic engine only needs nodes it can print back as source text and
//! (for expressions) read an attached type from. Each node's `Display`
//! produces source-shaped text, used verbatim inside messages and
//! rebuilt suggestions.

use super::{Span, Type};
use std::fmt;

/// An expression node carried inside a type-error record.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    /// The type the checker attached to this expression, if any.
    pub ty: Option<Type>,
    pub span: Span,
}

/// Expression shapes the diagnostic engine can encounter.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// A variable reference.
    Var(String),
    /// A literal, kept as the source text it was written as.
    Lit(String),
    /// Field access: `point.x`.
    FieldAccess { source: Box<Expr>, field: String },
    /// Function call: `f(a, b)`.
    Call { callee: String, args: Vec<Expr> },
    /// A cast; also used by the checker as a synthetic wrapper to smuggle
    /// an expected type through an expression slot.
    Cast { target: Type, inner: Box<Expr> },
    /// Tuple expression: `(a, b)`.
    Tuple(Vec<Expr>),
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr {
            kind,
            ty: None,
            span,
        }
    }

    pub fn var(name: impl Into<String>, span: Span) -> Self {
        Expr::new(ExprKind::Var(name.into()), span)
    }

    pub fn lit(text: impl Into<String>, span: Span) -> Self {
        Expr::new(ExprKind::Lit(text.into()), span)
    }

    pub fn field_access(source: Expr, field: impl Into<String>, span: Span) -> Self {
        Expr::new(
            ExprKind::FieldAccess {
                source: Box::new(source),
                field: field.into(),
            },
            span,
        )
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>, span: Span) -> Self {
        Expr::new(
            ExprKind::Call {
                callee: callee.into(),
                args,
            },
            span,
        )
    }

    pub fn cast(target: Type, inner: Expr, span: Span) -> Self {
        Expr::new(
            ExprKind::Cast {
                target,
                inner: Box::new(inner),
            },
            span,
        )
    }

    pub fn tuple(items: Vec<Expr>, span: Span) -> Self {
        Expr::new(ExprKind::Tuple(items), span)
    }

    /// Attach the checker's inferred type.
    #[must_use]
    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Var(name) => write!(f, "{name}"),
            ExprKind::Lit(text) => write!(f, "{text}"),
            ExprKind::FieldAccess { source, field } => write!(f, "{source}.{field}"),
            ExprKind::Call { callee, args } => {
                write!(f, "{callee}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            ExprKind::Cast { target, inner } => write!(f, "({target}) {inner}"),
            ExprKind::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A variable declaration statement: `int x = 5`.
#[derive(Clone, Debug, PartialEq)]
pub struct VarDecl {
    pub ty: Type,
    pub name: String,
    pub init: Option<Expr>,
    pub span: Span,
}

impl VarDecl {
    pub fn new(ty: Type, name: impl Into<String>, init: Option<Expr>, span: Span) -> Self {
        VarDecl {
            ty,
            name: name.into(),
            init,
            span,
        }
    }
}

impl fmt::Display for VarDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)?;
        if let Some(init) = &self.init {
            write!(f, " = {init}")?;
        }
        Ok(())
    }
}

/// A function parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: Type,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Param {
            name: name.into(),
            ty,
        }
    }
}

/// A function declaration header; the body is not needed for diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct FunDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub ret: Type,
    pub span: Span,
}

impl FunDecl {
    pub fn new(name: impl Into<String>, params: Vec<Param>, ret: Type, span: Span) -> Self {
        FunDecl {
            name: name.into(),
            params,
            ret,
            span,
        }
    }
}
