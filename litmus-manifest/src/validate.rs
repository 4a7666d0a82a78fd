//! Validation context and name rules for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Tracks the current path through the manifest (e.g. `inputs.Point`) so
/// error messages can say where a bad name was found.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "litmus.toml");
/// ctx.validate_name("Point", "input")?;
///
/// let nested = ctx.push("Point");
/// nested.validate_name("x", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Point"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "'Point' field" or just "input" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("'{}' {}", self.path_string(), kind)
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a valid schema name.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_name(name) {
            return Err(self.source.invalid_name_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }
}

/// Find the span of a name in the TOML source.
/// Searches for patterns like `.name]`, `.name.`, `{ name =`, or `name = "value"`
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Table headers: [inputs.Point] or [inputs.Point.fields.x]
    let header_patterns = [format!(".{}]", name), format!(".{}.", name)];

    for pattern in &header_patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // Inline tables: fields = { x = { type = "Int" } }
    let inline_patterns = [
        (format!("{{ {} ", name), 2usize),
        (format!("{{ {}=", name), 2usize),
        (format!("{{{}=", name), 1usize),
        (format!(", {} ", name), 2usize),
        (format!(", {}=", name), 2usize),
        (format!(",{}=", name), 1usize),
    ];

    for (pattern, skip) in &inline_patterns {
        if let Some(pos) = src.find(pattern) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    // Array format: [[inputs.Point.fields]] with name = "x"
    for quote in ['"', '\''] {
        let pattern = format!("name = {}{}{}", quote, name, quote);
        if let Some(pos) = src.find(&pattern) {
            // skip 'name = "'
            return Some(SourceSpan::from((pos + 8, name.len())));
        }
    }

    // Quoted list entries: values = ["RED", "GREEN"]
    for quote in ['"', '\''] {
        let pattern = format!("{}{}{}", quote, name, quote);
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    None
}

/// Validate a type, field, or enum value name (`/[_A-Za-z][_0-9A-Za-z]*/`).
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if name.starts_with("__") {
        return Some("names starting with '__' are reserved");
    }

    None
}

/// Enum values follow the name rules and cannot look like other literals.
pub(crate) fn validate_enum_value(value: &str) -> Option<&'static str> {
    if matches!(value, "true" | "false" | "null") {
        return Some("enum values cannot be true, false, or null");
    }
    validate_name(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Point").is_none());
        assert!(validate_name("_private").is_none());
        assert!(validate_name("field2").is_none());
        assert!(validate_name("SCREAMING_CASE").is_none());
    }

    #[test]
    fn test_invalid_names() {
        assert!(validate_name("").is_some());
        assert!(validate_name("2d").is_some());
        assert!(validate_name("kebab-case").is_some());
        assert!(validate_name("dotted.name").is_some());
        assert!(validate_name("__Type").is_some());
    }

    #[test]
    fn test_enum_values() {
        assert!(validate_enum_value("RED").is_none());
        assert!(validate_enum_value("true").is_some());
        assert!(validate_enum_value("null").is_some());
        assert!(validate_enum_value("1ST").is_some());
    }

    #[test]
    fn test_find_name_span_header() {
        let src = r#"[inputs.Point]
description = "test""#;
        let span = find_name_span(src, "Point").unwrap();
        assert_eq!(span.offset(), 8);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_find_name_span_field_header() {
        let src = r#"[inputs.Point.fields.x-axis]
type = "Int""#;
        let span = find_name_span(src, "x-axis").unwrap();
        assert_eq!(span.offset(), 21);
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_find_name_span_array_format() {
        let src = r#"[[inputs.Point.fields]]
name = "bad name"
type = "Int""#;
        let span = find_name_span(src, "bad name").unwrap();
        assert_eq!(span.offset(), 32);
        assert_eq!(span.len(), 8);
    }

    #[test]
    fn test_find_name_span_enum_value() {
        let src = r#"[enums.Color]
values = ["RED", "true"]"#;
        let span = find_name_span(src, "true").unwrap();
        assert_eq!(span.offset(), 32);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn test_parse_context_path() {
        let ctx = ParseContext::new("", "litmus.toml");
        assert_eq!(ctx.context_for("input"), "input");

        let nested = ctx.push("Point");
        assert_eq!(nested.path_string(), "Point");
        assert_eq!(nested.context_for("field"), "'Point' field");
    }

    #[test]
    fn test_parse_context_validate_name() {
        let ctx = ParseContext::new("[inputs.2d]", "litmus.toml");
        assert!(ctx.validate_name("Point", "input").is_ok());

        let err = ctx.validate_name("2d", "input").unwrap_err();
        assert_eq!(err.to_string(), "invalid input name '2d'");
    }
}
