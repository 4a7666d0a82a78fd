//! The leaf-type capability.

use litmus_ir::{Literal, Value};
use thiserror::Error;

/// A scalar or enum type that knows how to read its own literals.
///
/// Implement this trait for each custom scalar and register it with
/// [`Schema::register_leaf`](crate::Schema::register_leaf).
pub trait LeafType: Send + Sync {
    /// The type name as referenced from type strings (e.g. `"DateTime"`).
    fn name(&self) -> &str;

    /// Convert a literal node into a runtime value.
    ///
    /// Variables never reach this method; they are resolved by the coercer.
    fn parse_literal(&self, literal: &Literal) -> Result<Value, LeafError>;
}

/// Failure reported by a leaf type's literal parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name} cannot represent {message}")]
pub struct LeafError {
    pub type_name: String,
    pub message: String,
}

impl LeafError {
    /// Create a leaf error for the named type.
    ///
    /// `message` completes the sentence "`<type>` cannot represent ...".
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Error for a literal whose kind the type does not accept at all.
    pub fn unexpected(type_name: impl Into<String>, literal: &Literal) -> Self {
        Self::new(
            type_name,
            format!("{} literal: {}", literal.kind(), literal),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_error_message() {
        let err = LeafError::unexpected("Int", &Literal::string("x"));
        assert_eq!(err.to_string(), "Int cannot represent string literal: \"x\"");
    }
}
