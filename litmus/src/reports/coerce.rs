//! Coerce command report.

use litmus_ir::Value;

use super::output::{Output, Report};

/// How a coerced value is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Pretty JSON; undefined object fields are omitted.
    Json,
    /// Literal-style rendering that keeps `undefined`.
    Debug,
}

/// A coerced value ready for printing.
#[derive(Debug)]
pub struct CoerceReport {
    pub value: Value,
    pub format: ValueFormat,
}

impl CoerceReport {
    pub fn new(value: Value, format: ValueFormat) -> Self {
        Self { value, format }
    }
}

impl Report for CoerceReport {
    fn render(&self, out: &mut dyn Output) {
        match self.format {
            ValueFormat::Debug => out.preformatted(&self.value.to_string()),
            ValueFormat::Json => match serde_json::to_string_pretty(&self.value) {
                Ok(json) => out.preformatted(&json),
                Err(e) => out.warning(&format!("failed to encode value as JSON: {}", e)),
            },
        }
    }
}
