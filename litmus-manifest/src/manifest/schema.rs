use litmus_schema::{EnumType, InputField, InputObjectType, Schema, SchemaError};

use super::{FieldDef, Manifest};
use crate::convert::toml_to_value;

impl Manifest {
    /// Build a [`Schema`] holding the built-in scalars plus every declared type.
    ///
    /// Enums are registered before inputs so registration order matches the
    /// manifest. The schema is validated before it is returned, which rejects
    /// unknown field types and input objects that require themselves.
    pub fn to_schema(&self) -> Result<Schema, SchemaError> {
        let mut schema = Schema::new();

        for (name, def) in &self.enums {
            let mut enum_type = EnumType::new(name, def.value_names());
            if let Some(description) = &def.description {
                enum_type = enum_type.with_description(description);
            }
            schema.register_enum(enum_type)?;
        }

        for (name, def) in &self.inputs {
            let mut obj = InputObjectType::new(name);
            if let Some(description) = &def.description {
                obj = obj.with_description(description);
            }
            for (field_name, field) in &def.fields {
                obj = obj.field(field_name, input_field(field));
            }
            schema.register_input_object(obj)?;
        }

        schema.validate()?;
        Ok(schema)
    }
}

fn input_field(def: &FieldDef) -> InputField {
    let mut field = InputField::new(def.type_ref().clone());
    if let Some(default) = &def.default {
        field = field.with_default(toml_to_value(default));
    }
    if let Some(description) = &def.description {
        field = field.with_description(description);
    }
    field
}
