//! Built-in scalar types.

use litmus_ir::{Literal, Value};

use crate::{LeafError, LeafType};

/// The scalars every schema provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    Int,
    Float,
    String,
    Boolean,
    Id,
}

impl Scalar {
    /// All built-in scalars, in registration order.
    pub const ALL: [Scalar; 5] = [
        Scalar::Int,
        Scalar::Float,
        Scalar::String,
        Scalar::Boolean,
        Scalar::Id,
    ];

    /// Get the schema type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scalar::Int => "Int",
            Scalar::Float => "Float",
            Scalar::String => "String",
            Scalar::Boolean => "Boolean",
            Scalar::Id => "ID",
        }
    }

    /// Look up a built-in scalar by its schema name.
    pub fn from_name(name: &str) -> Option<Scalar> {
        Scalar::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl LeafType for Scalar {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn parse_literal(&self, literal: &Literal) -> Result<Value, LeafError> {
        match literal {
            Literal::Null => return Ok(Value::Null),
            // numeric literals have no leading '+'
            Literal::Int(raw) | Literal::Float(raw) if raw.starts_with('+') => {
                return Err(LeafError::new(
                    self.as_str(),
                    format!("malformed number literal: {}", raw),
                ));
            }
            _ => {}
        }

        match (self, literal) {
            (Scalar::Int, Literal::Int(raw)) => raw
                .parse::<i32>()
                .map(|i| Value::Int(i64::from(i)))
                .map_err(|_| {
                    LeafError::new(
                        self.as_str(),
                        format!("non 32-bit signed integer value: {}", raw),
                    )
                }),
            (Scalar::Float, Literal::Int(raw) | Literal::Float(raw)) => match raw.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(Value::Float(f)),
                _ => Err(LeafError::new(
                    self.as_str(),
                    format!("non-finite value: {}", raw),
                )),
            },
            (Scalar::String, Literal::String(s)) => Ok(Value::String(s.clone())),
            (Scalar::Boolean, Literal::Boolean(b)) => Ok(Value::Bool(*b)),
            (Scalar::Id, Literal::String(s) | Literal::Int(s)) => Ok(Value::String(s.clone())),
            _ => Err(LeafError::unexpected(self.as_str(), literal)),
        }
    }
}
