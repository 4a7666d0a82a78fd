//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use litmus_schema::Scalar;
use miette::SourceSpan;

use super::{EnumDef, InputDef, Manifest};
use crate::{
    Error, Result,
    error::{SourceContext, span_of},
    validate::{ParseContext, validate_enum_value},
};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "litmus.toml")
    }
}

impl Manifest {
    /// Parse a litmus.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a litmus.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    log::debug!(
        "parsed {}: {} enum(s), {} input(s)",
        filename,
        manifest.enums.len(),
        manifest.inputs.len()
    );
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for (name, def) in &manifest.enums {
        validate_type_name(&ctx, name, "enum")?;
        validate_enum(&ctx.push(name), name, def)?;
    }

    for (name, def) in &manifest.inputs {
        validate_type_name(&ctx, name, "input")?;
        if manifest.enums.contains_key(name) {
            return Err(Box::new(Error::DuplicateType {
                src: ctx.source_context().named_source(),
                first_span: find_table_span(src, "enums", name),
                second_span: find_table_span(src, "inputs", name),
                name: name.clone(),
            }));
        }
        validate_input(manifest, &ctx.push(name), name, def)?;
    }

    // Field types all resolve at this point; building the schema checks cycles.
    manifest.to_schema().map_err(|e| Box::new(Error::from(e)))?;
    Ok(())
}

fn validate_type_name(ctx: &ParseContext<'_>, name: &str, kind: &str) -> Result<()> {
    ctx.validate_name(name, kind)?;
    if Scalar::from_name(name).is_some() {
        return Err(ctx
            .source_context()
            .builtin_shadowed_error(name, ctx.find_span(name)));
    }
    Ok(())
}

fn validate_enum(ctx: &ParseContext<'_>, name: &str, def: &EnumDef) -> Result<()> {
    if def.values.is_empty() {
        return Err(ctx.source_context().validation_error(
            format!("enum '{}' must declare at least one value", name),
            ctx.find_span(name),
        ));
    }

    let mut seen: HashMap<&str, Option<SourceSpan>> = HashMap::new();
    for value in &def.values {
        let member = value.get_ref().as_str();
        let span = span_of(value.span()).or_else(|| ctx.find_span(member));

        if let Some(reason) = validate_enum_value(member) {
            return Err(ctx.source_context().invalid_name_error(
                member,
                ctx.context_for("enum value"),
                reason,
                span,
            ));
        }

        if let Some(first) = seen.get(member) {
            return Err(Box::new(Error::DuplicateEnumValue {
                src: ctx.source_context().named_source(),
                first_span: *first,
                second_span: span,
                value: member.to_string(),
                enum_name: name.to_string(),
            }));
        }
        seen.insert(member, span);
    }
    Ok(())
}

fn validate_input(
    manifest: &Manifest,
    ctx: &ParseContext<'_>,
    name: &str,
    def: &InputDef,
) -> Result<()> {
    for (field_name, field) in &def.fields {
        ctx.validate_name(field_name, "field")?;

        let base = field.type_ref().base_name();
        if Scalar::from_name(base).is_none() && !manifest.declares(base) {
            let span = span_of(field.ty.span()).or_else(|| ctx.find_span(field_name));
            return Err(ctx.source_context().unknown_type_error(
                base,
                format!("field '{}.{}'", name, field_name),
                span,
            ));
        }
    }
    Ok(())
}

/// Find the span of `name` in a `[table.name]` header or `table.name` dotted key.
fn find_table_span(src: &str, table: &str, name: &str) -> Option<SourceSpan> {
    let needle = format!("{}.{}", table, name);
    let mut from = 0;
    while let Some(pos) = src[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        let boundary = src[end..]
            .chars()
            .next()
            .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'));
        if boundary {
            return Some(SourceSpan::from((start + table.len() + 1, name.len())));
        }
        from = end;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(content: &str) -> String {
        content.parse::<Manifest>().unwrap_err().to_string()
    }

    #[test]
    fn test_parse_valid_manifest() {
        let manifest: Manifest = r#"
[enums.Sort]
values = ["ASC", "DESC"]

[inputs.Point]
fields = { x = { type = "Int" }, y = { type = "Int", default = 5 } }

[inputs.Filter.fields.sort]
type = "[Sort!]"

[inputs.Filter.fields.origin]
type = "Point"
"#
        .parse()
        .unwrap();

        assert_eq!(manifest.enums.len(), 1);
        assert_eq!(manifest.inputs.len(), 2);
    }

    #[test]
    fn test_toml_syntax_error() {
        assert_eq!(parse_err("[inputs.Point"), "failed to parse litmus.toml");
    }

    #[test]
    fn test_invalid_input_name() {
        assert_eq!(
            parse_err("[inputs.my-point]\n"),
            "invalid input name 'my-point'"
        );
    }

    #[test]
    fn test_invalid_field_name() {
        assert_eq!(
            parse_err(
                r#"
[inputs.Point.fields.x-axis]
type = "Int"
"#
            ),
            "invalid 'Point' field name 'x-axis'"
        );
    }

    #[test]
    fn test_builtin_shadowed() {
        assert_eq!(
            parse_err("[enums.ID]\nvalues = [\"A\"]\n"),
            "'ID' is a built-in scalar"
        );
    }

    #[test]
    fn test_enum_without_values() {
        assert_eq!(
            parse_err("[enums.Empty]\nvalues = []\n"),
            "enum 'Empty' must declare at least one value"
        );
    }

    #[test]
    fn test_reserved_enum_value() {
        assert_eq!(
            parse_err("[enums.Flag]\nvalues = [\"ON\", \"null\"]\n"),
            "invalid 'Flag' enum value name 'null'"
        );
    }

    #[test]
    fn test_duplicate_enum_value() {
        assert_eq!(
            parse_err("[enums.Sort]\nvalues = [\"ASC\", \"DESC\", \"ASC\"]\n"),
            "duplicate value 'ASC' in enum 'Sort'"
        );
    }

    #[test]
    fn test_enum_and_input_collide() {
        let src = "[enums.Point]\nvalues = [\"A\"]\n\n[inputs.Point]\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "type 'Point' is declared as both an enum and an input"
        );
        let Error::DuplicateType {
            first_span,
            second_span,
            ..
        } = *err
        else {
            panic!("expected DuplicateType");
        };
        assert_eq!(first_span.unwrap().offset(), 7);
        assert_eq!(second_span.unwrap().offset(), 38);
    }

    #[test]
    fn test_unknown_field_type() {
        let src = r#"[inputs.Filter.fields.tags]
type = "[Tag!]"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert_eq!(err.to_string(), "unknown type 'Tag' in field 'Filter.tags'");
        let Error::UnknownType { span, .. } = *err else {
            panic!("expected UnknownType");
        };
        // points at the quoted type string
        assert_eq!(span.unwrap().offset(), 35);
    }

    #[test]
    fn test_required_cycle_rejected() {
        let err = parse_err(
            r#"
[inputs.A.fields.b]
type = "B!"

[inputs.B.fields.a]
type = "A!"
"#,
        );
        assert!(err.contains("A.b -> B.a -> A"), "{}", err);
    }

    #[test]
    fn test_nullable_cycle_accepted() {
        let manifest: Manifest = r#"
[inputs.Node.fields.next]
type = "Node"

[inputs.Node.fields.children]
type = "[Node!]!"
"#
        .parse()
        .unwrap();
        assert_eq!(manifest.inputs["Node"].fields.len(), 2);
    }

    #[test]
    fn test_find_table_span_skips_prefix_matches() {
        let src = "[inputs.PointList]\n[inputs.Point]\n";
        let span = find_table_span(src, "inputs", "Point").unwrap();
        assert_eq!(span.offset(), 27);
    }
}
