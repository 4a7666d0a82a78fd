use std::{
    io,
    path::{Path, PathBuf},
};

use clap::Args;
use eyre::{Context, Result};
use litmus_coerce::{CoerceOptions, Variables};
use litmus_ir::{Literal, TypeRef};
use litmus_manifest::LitmusToml;
use serde::de::DeserializeOwned;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{CoerceReport, Report, TerminalOutput, ValueFormat},
};

#[derive(Args)]
pub struct CoerceCommand {
    /// Path to litmus.toml (defaults to ./litmus.toml)
    #[arg(short, long, default_value = "litmus.toml")]
    pub config: PathBuf,

    /// Declared type of the literal, e.g. `[Point!]`
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub ty: TypeRef,

    /// JSON-encoded literal file, or `-` to read stdin
    #[arg(short, long, value_name = "FILE")]
    pub literal: PathBuf,

    /// JSON object holding variable values
    #[arg(long, value_name = "FILE")]
    pub variables: Option<PathBuf>,

    /// Fail on variables missing from --variables instead of using null
    #[arg(long)]
    pub strict_variables: bool,

    /// Print the raw value, showing undefined fields
    #[arg(long)]
    pub debug: bool,
}

impl CoerceCommand {
    pub fn run(&self) -> Result<()> {
        let litmus_toml = LitmusToml::open(&self.config).unwrap_or_exit();
        let schema = litmus_toml.schema().unwrap_or_exit();

        let literal: Literal = read_json(&self.literal).wrap_err("Failed to read literal")?;
        let variables = match &self.variables {
            Some(path) => {
                let json: serde_json::Value =
                    read_json(path).wrap_err("Failed to read variables")?;
                Variables::try_from(json)
                    .wrap_err_with(|| format!("Invalid variables in {}", path.display()))?
            }
            None => Variables::new(),
        };

        let options = if self.strict_variables {
            CoerceOptions::strict()
        } else {
            CoerceOptions::default()
        };

        let value = ops::coerce(&schema, &literal, &self.ty, &variables, options).unwrap_or_exit();

        let format = if self.debug {
            ValueFormat::Debug
        } else {
            ValueFormat::Json
        };
        CoerceReport::new(value, format).render(&mut TerminalOutput::new());

        Ok(())
    }
}

/// Read and deserialize JSON from a file, or from stdin when the path is `-`.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = if path == Path::new("-") {
        io::read_to_string(io::stdin()).wrap_err("Failed to read stdin")?
    } else {
        std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?
    };
    serde_json::from_str(&content).wrap_err_with(|| format!("Invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_json_literal_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"kind": "list", "value": [{{"kind": "int", "value": "1"}}]}}"#).unwrap();

        let literal: Literal = read_json(file.path()).unwrap();
        assert_eq!(literal, Literal::list([Literal::int(1)]));
    }

    #[test]
    fn test_read_json_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = read_json::<Literal>(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON in "));
    }
}
