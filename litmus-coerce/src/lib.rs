//! Literal value coercion.
//!
//! Converts a [`Literal`](litmus_ir::Literal) into a
//! [`Value`](litmus_ir::Value) under the guidance of a declared
//! [`TypeRef`](litmus_ir::TypeRef):
//!
//! ```text
//! Literal + TypeRef + Variables ──Coercer(Schema)──▶ Value | CoercionError
//! ```
//!
//! The coercer assumes the literal was validated upstream. It unwraps
//! non-null, resolves variables, singleton-wraps bare values at list
//! positions, fills input-object defaults, marks absent fields
//! `Undefined`, and hands scalars and enums to their leaf type.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod coercer;
mod error;
mod path;
mod variables;

pub use coercer::{CoerceOptions, Coercer, UnresolvedVariable, coerce_literal};
pub use error::{CoercionError, ErrorKind, Result};
pub use path::{Path, PathSegment};
pub use variables::{Variables, VariablesError};
