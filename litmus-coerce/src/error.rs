use litmus_ir::LiteralKind;
use litmus_schema::LeafError;
use miette::Diagnostic;
use thiserror::Error;

use crate::Path;

/// Result type for coercion (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<CoercionError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum CoercionError {
    #[error("expected {expected} literal at {path}, found {found}")]
    #[diagnostic(
        code(litmus::coerce::shape_mismatch),
        help("the literal should have been rejected by validation")
    )]
    ShapeMismatch {
        expected: &'static str,
        found: LiteralKind,
        path: Path,
    },

    #[error("invalid {type_name} literal at {path}: {source}")]
    #[diagnostic(code(litmus::coerce::leaf_parse))]
    LeafParse {
        type_name: String,
        path: Path,
        #[source]
        source: LeafError,
    },

    #[error("variable '${name}' is not defined (at {path})")]
    #[diagnostic(
        code(litmus::coerce::unresolved_variable),
        help("pass a value for '${name}' or coerce with unresolved variables treated as null")
    )]
    UnresolvedVariable { name: String, path: Path },

    #[error("unknown type '{name}' at {path}")]
    #[diagnostic(code(litmus::coerce::unknown_type))]
    UnknownType { name: String, path: Path },
}

/// Kind of a [`CoercionError`], for callers that branch on failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ShapeMismatch,
    LeafParse,
    UnresolvedVariable,
    UnknownType,
}

impl CoercionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoercionError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            CoercionError::LeafParse { .. } => ErrorKind::LeafParse,
            CoercionError::UnresolvedVariable { .. } => ErrorKind::UnresolvedVariable,
            CoercionError::UnknownType { .. } => ErrorKind::UnknownType,
        }
    }

    /// Where in the literal the failure happened.
    pub fn path(&self) -> &Path {
        match self {
            CoercionError::ShapeMismatch { path, .. }
            | CoercionError::LeafParse { path, .. }
            | CoercionError::UnresolvedVariable { path, .. }
            | CoercionError::UnknownType { path, .. } => path,
        }
    }

    pub(crate) fn shape_mismatch(
        expected: &'static str,
        found: LiteralKind,
        path: &Path,
    ) -> Box<Self> {
        Box::new(CoercionError::ShapeMismatch {
            expected,
            found,
            path: path.clone(),
        })
    }

    pub(crate) fn leaf_parse(type_name: &str, source: LeafError, path: &Path) -> Box<Self> {
        Box::new(CoercionError::LeafParse {
            type_name: type_name.to_string(),
            path: path.clone(),
            source,
        })
    }

    pub(crate) fn unresolved_variable(name: &str, path: &Path) -> Box<Self> {
        Box::new(CoercionError::UnresolvedVariable {
            name: name.to_string(),
            path: path.clone(),
        })
    }

    pub(crate) fn unknown_type(name: &str, path: &Path) -> Box<Self> {
        Box::new(CoercionError::UnknownType {
            name: name.to_string(),
            path: path.clone(),
        })
    }
}
