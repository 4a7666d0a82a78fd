//! Intermediate representation types for Litmus.
//!
//! This crate provides the closed sum types every other Litmus crate works
//! with. They are the single source of truth for what a literal, a declared
//! type reference, and a coerced runtime value look like.
//!
//! # Architecture
//!
//! ```text
//! Literal (syntax) + TypeRef (declared) → litmus-coerce → Value (runtime)
//! ```
//!
//! The IR types are designed to be:
//! - Parser-agnostic (literal trees arrive already built)
//! - Schema-agnostic (type references are resolved by `litmus-schema`)
//! - Serializable (literals and values have stable JSON encodings)

mod literal;
mod type_ref;
mod value;

pub use literal::{Literal, LiteralKind, ObjectField};
pub use type_ref::{TypeRef, TypeRefError};
pub use value::Value;
