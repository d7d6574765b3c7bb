//! Example synthesis: a minimal literal for any type.
//!
//! Suggestions need syntactically valid stand-in values ("what would fit
//! here"), so the engine fabricates the smallest literal that type-checks
//! for a given type. The recursion is structural over the whole type
//! grammar; user-defined names resolve through the environment.

use crate::TypeEnv;
use std::fmt::Write;
use vela_ir::Type;

/// Synthesize a minimal example value for `ty`.
///
/// Fixed literals for primitives; `[]` for any list (the element type
/// never needs spelling out); the *first* bound for a union; fields in
/// declared order for records.
///
/// # Known limitation
///
/// `Named` types recurse through `env` with no cycle detection. A type
/// definition that reaches itself by name would recurse without bound;
/// the checker rejects such definitions before this engine runs, so no
/// guard is placed here. A name missing from `env` contributes an empty
/// string.
pub fn example_of(ty: &Type, env: &TypeEnv) -> String {
    match ty {
        Type::Int => "0".to_string(),
        Type::Real => "0.1".to_string(),
        Type::Char => "'a'".to_string(),
        Type::Str => "\"\"".to_string(),
        Type::Bool => "true".to_string(),
        Type::Null => "null".to_string(),
        // `void` has no values; it only names an absent return type.
        Type::Void => String::new(),
        Type::List(_) => "[]".to_string(),
        Type::Union(bounds) => bounds
            .first()
            .map(|bound| example_of(bound, env))
            .unwrap_or_default(),
        Type::Named(name) => env
            .get(name)
            .map(|definition| example_of(definition, env))
            .unwrap_or_default(),
        Type::Record(fields) => {
            let mut out = String::from("{");
            for (i, (name, field_ty)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{name} : {}", example_of(field_ty, env));
            }
            out.push('}');
            out
        }
        Type::Tuple(types) => {
            let mut out = String::from("(");
            for (i, elem) in types.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&example_of(elem, env));
            }
            out.push(')');
            out
        }
        Type::Reference(target) => format!("new {}", example_of(target, env)),
    }
}
