//! TOML declarations of Litmus input types.
//!
//! A `litmus.toml` declares enum and input object types:
//!
//! ```toml
//! [enums.Sort]
//! values = ["ASC", "DESC"]
//!
//! [inputs.Page.fields.size]
//! type = "Int"
//! default = 20
//!
//! [inputs.Page.fields.sort]
//! type = "[Sort!]"
//! ```
//!
//! [`Manifest`] parses and validates the file with source-located
//! diagnostics, and [`Manifest::to_schema`] turns it into a
//! [`litmus_schema::Schema`] ready for coercion.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod convert;
mod error;
mod manifest;
mod validate;

pub use convert::toml_to_value;
pub use error::{Error, Result, SourceContext};
pub use manifest::{EnumDef, FieldDef, InputDef, LitmusToml, Manifest};
pub use validate::ParseContext;
