//! Type environment and type-directed diagnostics for the Vela front-end.
//!
//! The external checker detects semantic errors and hands this crate one
//! [`TypeErrorData`] record per error plus the [`TypeEnv`] of user-defined
//! types. [`engine::handle`] renders every record as a human-readable
//! message with (where intent allows) a synthesized, syntactically valid
//! code suggestion, then declares the batch fatal.

pub mod engine;
mod env;
mod error;
mod example;

pub use engine::{handle, Handled};
pub use env::TypeEnv;
pub use error::{ErrorNode, TypeErrorData, TypeErrorKind};
pub use example::example_of;
