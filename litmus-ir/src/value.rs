//! Runtime values produced by coercion.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer, ser::SerializeMap};

/// A normalized, type-agnostic runtime value.
///
/// | Literal       | Value        |
/// |---------------|--------------|
/// | input object  | `Object`     |
/// | list          | `Array`      |
/// | boolean       | `Bool`       |
/// | string        | `String`     |
/// | int           | `Int`        |
/// | float         | `Float`      |
/// | enum member   | `String`     |
///
/// `Undefined` marks an input-object field that was absent from the
/// literal and has no default. It is distinct from an explicit `Null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    /// Keys are kept in insertion order.
    Object(IndexMap<String, Value>),
    Undefined,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up an object field. `None` for non-objects and missing keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|fields| fields.get(key))
    }

    /// Convert to JSON.
    ///
    /// Undefined object fields are omitted; any other `Undefined` (array
    /// element, top level) and non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null | Value::Undefined => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(fields) => serde_json::Value::Object(
                fields
                    .iter()
                    .filter(|(_, v)| !v.is_undefined())
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Integral numbers become `Int`. Anything else numeric becomes `Float`,
/// including integers above `i64::MAX`, which lose precision.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Value::Object(fields)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null | Value::Undefined => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => items.serialize(serializer),
            Value::Object(fields) => {
                let defined = fields.values().filter(|v| !v.is_undefined()).count();
                let mut map = serializer.serialize_map(Some(defined))?;
                for (k, v) in fields.iter().filter(|(_, v)| !v.is_undefined()) {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::String(s) => {
                let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(fields) => {
                f.write_str("{")?;
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> Value {
        Value::from_iter([
            ("x", Value::Int(1)),
            ("y", Value::Undefined),
            ("ratio", Value::Float(0.5)),
            ("tags", Value::Array(vec!["a".into(), Value::Undefined])),
        ])
    }

    #[test]
    fn test_display_shows_undefined() {
        insta::assert_snapshot!(sample().to_string(), @r#"{x: 1, y: undefined, ratio: 0.5, tags: ["a", undefined]}"#);
    }

    #[test]
    fn test_to_json_omits_undefined_fields() {
        assert_eq!(
            sample().to_json(),
            json!({"x": 1, "ratio": 0.5, "tags": ["a", null]})
        );
        assert_eq!(Value::Undefined.to_json(), serde_json::Value::Null);
    }

    #[test]
    fn test_serialize_matches_to_json() {
        let value = sample();
        assert_eq!(serde_json::to_value(&value).unwrap(), value.to_json());
    }

    #[test]
    fn test_to_json_keeps_field_order() {
        let value = Value::from_iter([("b", Value::Int(1)), ("a", Value::Int(2))]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn test_from_json() {
        let value = Value::from(json!({"n": 3, "f": 2.5, "s": "hi", "l": [true, null]}));
        assert_eq!(value.get("n"), Some(&Value::Int(3)));
        assert_eq!(value.get("f"), Some(&Value::Float(2.5)));
        assert_eq!(value.get("s").and_then(Value::as_str), Some("hi"));
        assert_eq!(
            value.get("l").and_then(Value::as_array),
            Some(&[Value::Bool(true), Value::Null][..])
        );
    }

    #[test]
    fn test_from_json_integer_beyond_i64_is_float() {
        let value = Value::from(json!(18446744073709551615u64));
        assert_eq!(value, Value::Float(18446744073709551615.0));
        assert_eq!(Value::from(json!(i64::MIN)), Value::Int(i64::MIN));
    }

    #[test]
    fn test_null_is_not_undefined() {
        assert!(Value::Null.is_null());
        assert!(!Value::Null.is_undefined());
        assert!(Value::Undefined.is_undefined());
        assert_ne!(Value::Null, Value::Undefined);
    }

    #[test]
    fn test_numeric_accessors() {
        assert_eq!(Value::Int(4).as_f64(), Some(4.0));
        assert_eq!(Value::Float(4.5).as_i64(), None);
        assert_eq!(Value::from(7).as_i64(), Some(7));
    }
}
