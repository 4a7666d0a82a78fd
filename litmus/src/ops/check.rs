//! Check operation - manifest summary.

use std::path::Path;

use litmus_manifest::{Manifest, toml_to_value};

use crate::reports::{CheckReport, EnumSummary, FieldSummary, InputSummary};

/// Execute the check operation.
///
/// The manifest has already been validated when it was opened; this
/// collects the declared types for display.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let enums = manifest
        .enums
        .iter()
        .map(|(name, def)| EnumSummary {
            name: name.clone(),
            description: def.description.clone(),
            values: def.value_names().map(String::from).collect(),
        })
        .collect();

    let inputs = manifest
        .inputs
        .iter()
        .map(|(name, def)| InputSummary {
            name: name.clone(),
            description: def.description.clone(),
            fields: def
                .fields
                .iter()
                .map(|(field_name, field)| FieldSummary {
                    name: field_name.clone(),
                    ty: field.type_ref().to_string(),
                    default: field.default.as_ref().map(|d| toml_to_value(d).to_string()),
                })
                .collect(),
        })
        .collect();

    CheckReport {
        config_path: config_path.to_path_buf(),
        enums,
        inputs,
    }
}
