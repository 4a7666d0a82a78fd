//! Coerce operation.

use litmus_coerce::{CoerceOptions, Coercer, Result, Variables};
use litmus_ir::{Literal, TypeRef, Value};
use litmus_schema::Schema;

/// Coerce `literal` against `ty` using the given schema and variables.
pub fn coerce(
    schema: &Schema,
    literal: &Literal,
    ty: &TypeRef,
    variables: &Variables,
    options: CoerceOptions,
) -> Result<Value> {
    log::debug!(
        "coercing {} literal as {} with {} variable(s)",
        literal.kind(),
        ty,
        variables.len()
    );
    Coercer::new(schema)
        .with_options(options)
        .coerce(literal, ty, variables)
}

#[cfg(test)]
mod tests {
    use litmus_coerce::ErrorKind;
    use litmus_manifest::Manifest;

    use super::*;

    fn schema() -> Schema {
        let manifest: Manifest = r#"
[inputs.Point]
fields = { x = { type = "Int" }, y = { type = "Int", default = 5 } }
"#
        .parse()
        .unwrap();
        manifest.to_schema().unwrap()
    }

    #[test]
    fn test_coerce_with_manifest_schema() {
        let literal = Literal::object([("x", Literal::variable("x"))]);
        let vars = Variables::from_iter([("x", 1)]);
        let ty: TypeRef = "[Point!]".parse().unwrap();

        let value = coerce(&schema(), &literal, &ty, &vars, CoerceOptions::default()).unwrap();
        assert_eq!(value.to_string(), "[{x: 1, y: 5}]");
    }

    #[test]
    fn test_coerce_strict_variables() {
        let literal = Literal::object([("x", Literal::variable("x"))]);
        let ty: TypeRef = "Point".parse().unwrap();

        let err = coerce(
            &schema(),
            &literal,
            &ty,
            &Variables::new(),
            CoerceOptions::strict(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnresolvedVariable);
    }
}
