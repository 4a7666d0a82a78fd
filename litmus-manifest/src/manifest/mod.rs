//! Manifest types and parsing for litmus.toml files.

mod deserialize;
mod file;
mod parse;
mod schema;

use deserialize::deserialize_fields;
pub use file::LitmusToml;
use indexmap::IndexMap;
use litmus_ir::TypeRef;
use serde::Deserialize;
use toml::Spanned;

/// Root manifest for litmus.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Enum types, in declaration order
    #[serde(default)]
    pub enums: IndexMap<String, EnumDef>,

    /// Input object types, in declaration order
    #[serde(default)]
    pub inputs: IndexMap<String, InputDef>,
}

/// An enum declaration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDef {
    /// Description for listings
    pub description: Option<String>,

    /// Member names
    /// Wrapped in Spanned to preserve source location for error reporting
    pub values: Vec<Spanned<String>>,
}

impl EnumDef {
    /// Iterate member names without spans.
    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.get_ref().as_str())
    }
}

/// An input object declaration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputDef {
    /// Description for listings
    pub description: Option<String>,

    /// Fields, in declaration order
    /// Supports both formats:
    /// - Map: `[inputs.Point.fields.x]` or `fields = { x = { type = "Int" } }`
    /// - Array: `[[inputs.Point.fields]]` with `name = "..."` field
    #[serde(default, deserialize_with = "deserialize_fields")]
    pub fields: IndexMap<String, FieldDef>,
}

/// An input object field declaration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDef {
    /// Declared type, e.g. `"[Int!]"`
    #[serde(rename = "type")]
    pub ty: Spanned<TypeRef>,

    /// Description for listings
    pub description: Option<String>,

    /// Value used when a literal omits the field
    pub default: Option<toml::Value>,
}

impl FieldDef {
    pub fn type_ref(&self) -> &TypeRef {
        self.ty.get_ref()
    }
}

impl Manifest {
    /// Check if a type is declared (enum or input)
    pub fn declares(&self, name: &str) -> bool {
        self.enums.contains_key(name) || self.inputs.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty() && self.inputs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Manifest {
        toml::from_str(content).expect("Failed to parse TOML")
    }

    // ========================================================================
    // Map format tests
    // ========================================================================

    #[test]
    fn test_fields_map_format() {
        let manifest = parse(
            r#"
            [inputs.Point]
            description = "A point"

            [inputs.Point.fields.x]
            type = "Int!"

            [inputs.Point.fields.y]
            type = "Int"
            default = 5
            description = "Vertical offset"
            "#,
        );

        let point = manifest.inputs.get("Point").unwrap();
        assert_eq!(point.description.as_deref(), Some("A point"));
        assert_eq!(point.fields.len(), 2);

        let x = point.fields.get("x").unwrap();
        assert_eq!(x.type_ref().to_string(), "Int!");
        assert!(x.default.is_none());

        let y = point.fields.get("y").unwrap();
        assert_eq!(y.default.as_ref().and_then(|d| d.as_integer()), Some(5));
        assert_eq!(y.description.as_deref(), Some("Vertical offset"));
    }

    #[test]
    fn test_fields_map_format_keeps_order() {
        let manifest = parse(
            r#"
            [inputs.Range]
            fields = { to = { type = "Int" }, from = { type = "Int" }, step = { type = "Int" } }
            "#,
        );

        let names: Vec<&str> = manifest.inputs["Range"]
            .fields
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["to", "from", "step"]);
    }

    // ========================================================================
    // Array format tests
    // ========================================================================

    #[test]
    fn test_fields_array_format() {
        let manifest = parse(
            r#"
            [inputs.Filter]

            [[inputs.Filter.fields]]
            name = "tags"
            type = "[String!]"

            [[inputs.Filter.fields]]
            name = "limit"
            type = "Int"
            default = 10
            "#,
        );

        let filter = manifest.inputs.get("Filter").unwrap();
        let names: Vec<&str> = filter.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["tags", "limit"]);
        assert_eq!(
            filter.fields["tags"].type_ref(),
            &TypeRef::list(TypeRef::named("String").non_null())
        );
    }

    #[test]
    fn test_fields_array_format_rejects_duplicates() {
        let result: Result<Manifest, _> = toml::from_str(
            r#"
            [[inputs.Filter.fields]]
            name = "tags"
            type = "String"

            [[inputs.Filter.fields]]
            name = "tags"
            type = "Int"
            "#,
        );
        let err = result.unwrap_err();
        assert!(err.message().contains("duplicate field 'tags'"));
    }

    // ========================================================================
    // Enums, defaults and type syntax
    // ========================================================================

    #[test]
    fn test_enum_values() {
        let manifest = parse(
            r#"
            [enums.Color]
            description = "Primary colours"
            values = ["RED", "GREEN", "BLUE"]
            "#,
        );

        let color = manifest.enums.get("Color").unwrap();
        assert_eq!(color.value_names().collect::<Vec<_>>(), ["RED", "GREEN", "BLUE"]);
        assert!(manifest.declares("Color"));
        assert!(!manifest.declares("Point"));
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = parse("");
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_invalid_type_syntax_is_a_parse_error() {
        let result: Result<Manifest, _> = toml::from_str(
            r#"
            [inputs.Point.fields.x]
            type = "[Int"
            "#,
        );
        let err = result.unwrap_err();
        assert!(err.message().contains("unclosed '['"));
        assert!(err.span().is_some());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<Manifest, _> = toml::from_str(
            r#"
            [inputs.Point.fields.x]
            type = "Int"
            required = true
            "#,
        );
        assert!(result.is_err());
    }
}
