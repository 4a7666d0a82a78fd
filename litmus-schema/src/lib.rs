//! Declared input types for Litmus.
//!
//! A [`Schema`] owns every named type a literal can be coerced against:
//! the built-in scalars, enum types, input objects, and any custom leaf
//! type registered by the embedding application.
//!
//! Leaf types (scalars and enums) own their literal parsing through the
//! [`LeafType`] trait. Structural types (lists, non-null, input objects)
//! are classified by [`Schema::shape`] so the coercer can match on a closed
//! [`Shape`] instead of testing types at runtime.

mod enum_type;
mod input_object;
mod leaf;
mod registry;
mod scalar;

pub use enum_type::EnumType;
pub use input_object::{InputField, InputObjectType};
pub use leaf::{LeafError, LeafType};
pub use registry::{NamedType, Schema, SchemaError, Shape};
pub use scalar::Scalar;
