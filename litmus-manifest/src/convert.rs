//! Conversion of TOML default values into coercion values.

use litmus_ir::Value;

/// Convert a TOML value into a [`Value`].
///
/// Tables keep their key order. TOML has no null, so every result is
/// defined. Datetimes have no counterpart and are kept as their RFC 3339
/// text.
pub fn toml_to_value(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::Int(*i),
        toml::Value::Float(f) => Value::Float(*f),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.iter().map(toml_to_value).collect()),
        toml::Value::Table(table) => table
            .iter()
            .map(|(k, v)| (k.as_str(), toml_to_value(v)))
            .collect(),
    }
}
