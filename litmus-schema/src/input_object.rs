//! Input object types.

use indexmap::IndexMap;
use litmus_ir::{TypeRef, Value};

/// An input object type with ordered field declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectType {
    name: String,
    description: Option<String>,
    fields: IndexMap<String, InputField>,
}

/// A declared input-object field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    /// Declared type of the field.
    pub ty: TypeRef,
    /// Value used when the literal omits the field. Used verbatim.
    pub default: Option<Value>,
    /// Description for help text.
    pub description: Option<String>,
}

impl InputField {
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            default: None,
            description: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare a field. Redeclaring a name replaces it in place.
    pub fn field(mut self, name: impl Into<String>, field: InputField) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn get_field(&self, name: &str) -> Option<&InputField> {
        self.fields.get(name)
    }
}
