//! Literal nodes as they appear in a parsed query document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value written directly in query source.
///
/// Scalar payloads are kept opaque: `Int` and `Float` hold their raw source
/// text so that leaf types decide how (and whether) they fit.
///
/// The JSON encoding is adjacently tagged:
///
/// ```json
/// {"kind": "object", "value": [{"name": "x", "value": {"kind": "int", "value": "1"}}]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Literal {
    /// Variable reference (`$name`), stored without the sigil.
    Variable(String),
    Int(String),
    Float(String),
    String(String),
    Boolean(bool),
    Null,
    /// Enum member name.
    Enum(String),
    List(Vec<Literal>),
    /// Field assignments in source order. Names may repeat.
    Object(Vec<ObjectField>),
}

/// A single `name: value` assignment inside an object literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    pub name: String,
    pub value: Literal,
}

impl ObjectField {
    pub fn new(name: impl Into<String>, value: Literal) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Literal {
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Int literal from anything with an integer-looking `Display`.
    pub fn int(value: impl fmt::Display) -> Self {
        Self::Int(value.to_string())
    }

    pub fn float(value: impl fmt::Display) -> Self {
        Self::Float(value.to_string())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn enum_value(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    pub fn list(items: impl IntoIterator<Item = Literal>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Object literal from `(name, value)` pairs, keeping their order.
    pub fn object<N: Into<String>>(fields: impl IntoIterator<Item = (N, Literal)>) -> Self {
        Self::Object(
            fields
                .into_iter()
                .map(|(name, value)| ObjectField::new(name, value))
                .collect(),
        )
    }

    /// The syntactic kind of this node.
    pub fn kind(&self) -> LiteralKind {
        match self {
            Self::Variable(_) => LiteralKind::Variable,
            Self::Int(_) => LiteralKind::Int,
            Self::Float(_) => LiteralKind::Float,
            Self::String(_) => LiteralKind::String,
            Self::Boolean(_) => LiteralKind::Boolean,
            Self::Null => LiteralKind::Null,
            Self::Enum(_) => LiteralKind::Enum,
            Self::List(_) => LiteralKind::List,
            Self::Object(_) => LiteralKind::Object,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "${}", name),
            Self::Int(raw) | Self::Float(raw) => f.write_str(raw),
            Self::String(s) => {
                let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Null => f.write_str("null"),
            Self::Enum(name) => f.write_str(name),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Self::Object(fields) => {
                f.write_str("{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Syntactic kind of a [`Literal`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Variable,
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    Object,
}

impl LiteralKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LiteralKind::Variable => "variable",
            LiteralKind::Int => "int",
            LiteralKind::Float => "float",
            LiteralKind::String => "string",
            LiteralKind::Boolean => "boolean",
            LiteralKind::Null => "null",
            LiteralKind::Enum => "enum",
            LiteralKind::List => "list",
            LiteralKind::Object => "object",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
