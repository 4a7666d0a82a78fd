//! Declared type references (`Int`, `[Point!]`, `String!`).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A reference to a declared type, as written at an argument, field or
/// list position.
///
/// Named references are resolved by a schema; wrappers are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn list(item: TypeRef) -> Self {
        Self::List(Box::new(item))
    }

    /// Wrap in non-null. Already non-null references are returned as is.
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            other => Self::NonNull(Box::new(other)),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// The innermost named type.
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{}]", inner),
            Self::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

impl From<TypeRef> for String {
    fn from(ty: TypeRef) -> Self {
        ty.to_string()
    }
}

impl TryFrom<String> for TypeRef {
    type Error = TypeRefError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Errors from parsing the textual form of a [`TypeRef`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeRefError {
    #[error("empty type reference")]
    Empty,

    #[error("unexpected '{ch}' at offset {offset} in type reference")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unclosed '[' in type reference")]
    UnclosedList,

    #[error("'!' cannot be applied to a non-null type")]
    DoubleNonNull,
}

impl FromStr for TypeRef {
    type Err = TypeRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = TypeRefParser { src: s, pos: 0 };
        parser.skip_ws();
        if parser.at_end() {
            return Err(TypeRefError::Empty);
        }
        let ty = parser.parse_type()?;
        parser.skip_ws();
        match parser.peek() {
            None => Ok(ty),
            Some(ch) => Err(TypeRefError::UnexpectedChar {
                ch,
                offset: parser.pos,
            }),
        }
    }
}

struct TypeRefParser<'a> {
    src: &'a str,
    pos: usize,
}

impl TypeRefParser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn parse_type(&mut self) -> Result<TypeRef, TypeRefError> {
        self.skip_ws();
        let base = match self.peek() {
            Some('[') => {
                self.bump();
                let item = self.parse_type()?;
                self.skip_ws();
                match self.bump() {
                    Some(']') => TypeRef::list(item),
                    Some(ch) => {
                        return Err(TypeRefError::UnexpectedChar {
                            ch,
                            offset: self.pos - ch.len_utf8(),
                        });
                    }
                    None => return Err(TypeRefError::UnclosedList),
                }
            }
            Some(c) if c == '_' || c.is_ascii_alphabetic() => TypeRef::Named(self.parse_name()),
            Some(ch) => {
                return Err(TypeRefError::UnexpectedChar {
                    ch,
                    offset: self.pos,
                });
            }
            None => return Err(TypeRefError::UnclosedList),
        };

        self.skip_ws();
        if self.peek() != Some('!') {
            return Ok(base);
        }
        self.bump();
        self.skip_ws();
        if self.peek() == Some('!') {
            return Err(TypeRefError::DoubleNonNull);
        }
        Ok(TypeRef::NonNull(Box::new(base)))
    }

    fn parse_name(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c == '_' || c.is_ascii_alphanumeric()) {
            self.bump();
        }
        self.src[start..self.pos].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named() {
        assert_eq!("Int".parse::<TypeRef>().unwrap(), TypeRef::named("Int"));
        assert_eq!(
            " Point ".parse::<TypeRef>().unwrap(),
            TypeRef::named("Point")
        );
    }

    #[test]
    fn test_parse_wrappers() {
        let ty: TypeRef = "[Int!]!".parse().unwrap();
        assert_eq!(
            ty,
            TypeRef::list(TypeRef::named("Int").non_null()).non_null()
        );
        assert_eq!(ty.to_string(), "[Int!]!");
        assert_eq!(ty.base_name(), "Int");
        assert!(ty.is_non_null());
    }

    #[test]
    fn test_parse_nested_lists() {
        let ty: TypeRef = "[[ Float ]]".parse().unwrap();
        assert_eq!(ty.to_string(), "[[Float]]");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<TypeRef>(), Err(TypeRefError::Empty));
        assert_eq!("[Int".parse::<TypeRef>(), Err(TypeRefError::UnclosedList));
        assert_eq!("Int!!".parse::<TypeRef>(), Err(TypeRefError::DoubleNonNull));
        assert_eq!(
            "Int]".parse::<TypeRef>(),
            Err(TypeRefError::UnexpectedChar { ch: ']', offset: 3 })
        );
        assert_eq!(
            "9Int".parse::<TypeRef>(),
            Err(TypeRefError::UnexpectedChar { ch: '9', offset: 0 })
        );
    }

    #[test]
    fn test_non_null_is_idempotent() {
        let ty = TypeRef::named("ID").non_null().non_null();
        assert_eq!(ty.to_string(), "ID!");
    }

    #[test]
    fn test_serde_as_string() {
        let ty: TypeRef = serde_json::from_str("\"[String]\"").unwrap();
        assert_eq!(ty, TypeRef::list(TypeRef::named("String")));
        assert_eq!(serde_json::to_string(&ty).unwrap(), "\"[String]\"");
    }
}
