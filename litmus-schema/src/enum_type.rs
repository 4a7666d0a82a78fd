//! Enum types.

use indexmap::IndexSet;
use litmus_ir::{Literal, Value};

use crate::{LeafError, LeafType};

/// An enum type: a closed set of member names.
///
/// Members coerce to `Value::String` holding the member name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    name: String,
    description: Option<String>,
    values: IndexSet<String>,
}

impl EnumType {
    pub fn new<V: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Members in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn contains(&self, member: &str) -> bool {
        self.values.contains(member)
    }
}

impl LeafType for EnumType {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse_literal(&self, literal: &Literal) -> Result<Value, LeafError> {
        match literal {
            Literal::Null => Ok(Value::Null),
            Literal::Enum(member) if self.contains(member) => Ok(Value::String(member.clone())),
            Literal::Enum(member) => Err(LeafError::new(
                &self.name,
                format!("unknown enum value: {}", member),
            )),
            other => Err(LeafError::unexpected(&self.name, other)),
        }
    }
}
