//! The variable table.

use indexmap::IndexMap;
use litmus_ir::Value;
use thiserror::Error;

/// Already-resolved variable values, keyed by name (without `$`).
///
/// An empty table behaves exactly like "no variables supplied".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: IndexMap<String, Value>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<IndexMap<String, Value>> for Variables {
    fn from(values: IndexMap<String, Value>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Rejected JSON variable input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariablesError {
    #[error("variables must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("variable '${name}' holds {number}, outside the 64-bit signed integer range")]
    IntegerOutOfRange { name: String, number: String },
}

/// First integer in `json` that does not fit an `i64`.
///
/// `Value::from` would otherwise turn it into a lossy `Float`.
fn oversized_integer(json: &serde_json::Value) -> Option<&serde_json::Number> {
    match json {
        serde_json::Value::Number(n) if n.is_u64() && n.as_i64().is_none() => Some(n),
        serde_json::Value::Array(items) => items.iter().find_map(oversized_integer),
        serde_json::Value::Object(fields) => fields.values().find_map(oversized_integer),
        _ => None,
    }
}

impl TryFrom<serde_json::Value> for Variables {
    type Error = VariablesError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        let found = match json {
            serde_json::Value::Object(map) => {
                if let Some((name, number)) = map
                    .iter()
                    .find_map(|(name, v)| oversized_integer(v).map(|n| (name, n)))
                {
                    return Err(VariablesError::IntegerOutOfRange {
                        name: name.clone(),
                        number: number.to_string(),
                    });
                }
                return Ok(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect());
            }
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
        };
        Err(VariablesError::NotAnObject { found })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_json_object() {
        let vars = Variables::try_from(json!({"limit": 10, "tags": ["a"]})).unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("limit"), Some(&Value::Int(10)));
        assert_eq!(
            vars.get("tags"),
            Some(&Value::Array(vec![Value::from("a")]))
        );
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = Variables::try_from(json!([1, 2])).unwrap_err();
        assert_eq!(err.to_string(), "variables must be a JSON object, found array");
    }

    #[test]
    fn test_from_json_rejects_integers_beyond_i64() {
        let err = Variables::try_from(json!({"id": 18446744073709551615u64})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "variable '$id' holds 18446744073709551615, outside the 64-bit signed integer range"
        );

        let err = Variables::try_from(json!({"page": {"ids": [1, 9223372036854775808u64]}}))
            .unwrap_err();
        assert_eq!(
            err,
            VariablesError::IntegerOutOfRange {
                name: "page".into(),
                number: "9223372036854775808".into(),
            }
        );
    }

    #[test]
    fn test_from_json_keeps_integer_bounds_and_floats() {
        let vars = Variables::try_from(json!({
            "max": i64::MAX,
            "min": i64::MIN,
            "ratio": 1.5e300,
        }))
        .unwrap();
        assert_eq!(vars.get("max"), Some(&Value::Int(i64::MAX)));
        assert_eq!(vars.get("min"), Some(&Value::Int(i64::MIN)));
        assert_eq!(vars.get("ratio"), Some(&Value::Float(1.5e300)));
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut vars = Variables::new();
        assert!(vars.is_empty());
        vars.insert("v", 42);
        assert!(vars.contains("v"));
        assert_eq!(vars.iter().collect::<Vec<_>>(), [("v", &Value::Int(42))]);
    }
}
