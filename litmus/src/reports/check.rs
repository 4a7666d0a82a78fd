//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Declared enums, in manifest order.
    pub enums: Vec<EnumSummary>,
    /// Declared input objects, in manifest order.
    pub inputs: Vec<InputSummary>,
}

#[derive(Debug)]
pub struct EnumSummary {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<String>,
}

#[derive(Debug)]
pub struct InputSummary {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldSummary>,
}

#[derive(Debug)]
pub struct FieldSummary {
    pub name: String,
    pub ty: String,
    /// Default rendered in literal syntax.
    pub default: Option<String>,
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

fn with_description(name: &str, description: Option<&str>) -> String {
    match description {
        Some(desc) => format!("{} - {}", name, desc),
        None => name.to_string(),
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.success(&format!("{} is valid", self.config_path.display()));

        if !self.enums.is_empty() {
            out.newline();
            out.section(&plural(self.enums.len(), "enum"));
            for e in &self.enums {
                out.list_item(&with_description(&e.name, e.description.as_deref()));
                out.nested_item(&e.values.join(", "));
            }
        }

        if !self.inputs.is_empty() {
            out.newline();
            out.section(&plural(self.inputs.len(), "input"));
            for input in &self.inputs {
                out.list_item(&with_description(&input.name, input.description.as_deref()));
                for field in &input.fields {
                    let line = match &field.default {
                        Some(default) => format!("{}: {} = {}", field.name, field.ty, default),
                        None => format!("{}: {}", field.name, field.ty),
                    };
                    out.nested_item(&line);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_lists_types() {
        let report = CheckReport {
            config_path: PathBuf::from("litmus.toml"),
            enums: vec![EnumSummary {
                name: "Sort".into(),
                description: Some("Sort order".into()),
                values: vec!["ASC".into(), "DESC".into()],
            }],
            inputs: vec![InputSummary {
                name: "Point".into(),
                description: None,
                fields: vec![
                    FieldSummary {
                        name: "x".into(),
                        ty: "Int!".into(),
                        default: None,
                    },
                    FieldSummary {
                        name: "y".into(),
                        ty: "Int".into(),
                        default: Some("5".into()),
                    },
                ],
            }],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        insta::assert_snapshot!(out.text(), @r"
        ✓ litmus.toml is valid

          1 enum:
            Sort - Sort order
              ASC, DESC

          1 input:
            Point
              x: Int!
              y: Int = 5
        ");
    }

    #[test]
    fn test_render_empty_manifest() {
        let report = CheckReport {
            config_path: PathBuf::from("litmus.toml"),
            enums: Vec::new(),
            inputs: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        insta::assert_snapshot!(out.text(), @"✓ litmus.toml is valid");
    }
}
