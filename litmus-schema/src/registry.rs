//! The named-type registry and shape lookup.

use std::{collections::HashMap, fmt, sync::Arc};

use indexmap::IndexMap;
use litmus_ir::TypeRef;
use miette::Diagnostic;
use thiserror::Error;

use crate::{EnumType, InputObjectType, LeafType, Scalar};

/// A type registered under a name.
#[derive(Clone)]
pub enum NamedType {
    /// Scalar, enum, or custom leaf.
    Leaf(Arc<dyn LeafType>),
    InputObject(InputObjectType),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            NamedType::Leaf(leaf) => leaf.name(),
            NamedType::InputObject(obj) => obj.name(),
        }
    }

    /// Get the kind label used in listings and diagnostics.
    pub fn kind_str(&self) -> &'static str {
        match self {
            NamedType::Leaf(_) => "leaf",
            NamedType::InputObject(_) => "input",
        }
    }
}

impl fmt::Debug for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedType::Leaf(leaf) => f.debug_tuple("Leaf").field(&leaf.name()).finish(),
            NamedType::InputObject(obj) => f.debug_tuple("InputObject").field(obj).finish(),
        }
    }
}

/// Structural classification of a [`TypeRef`] against a schema.
///
/// This is the closed set of shapes the coercer dispatches on.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    NonNull(&'a TypeRef),
    List(&'a TypeRef),
    InputObject(&'a InputObjectType),
    Leaf(&'a dyn LeafType),
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::NonNull(inner) => write!(f, "NonNull({})", inner),
            Shape::List(item) => write!(f, "List({})", item),
            Shape::InputObject(obj) => write!(f, "InputObject({})", obj.name()),
            Shape::Leaf(leaf) => write!(f, "Leaf({})", leaf.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SchemaError {
    #[error("type '{name}' is already defined")]
    #[diagnostic(code(litmus::schema::duplicate_type))]
    DuplicateType { name: String },

    #[error("unknown type '{name}' referenced by {referenced_by}")]
    #[diagnostic(
        code(litmus::schema::unknown_type),
        help("declare '{name}' or use one of the built-in scalars: Int, Float, String, Boolean, ID")
    )]
    UnknownType { name: String, referenced_by: String },

    #[error("input objects reference each other through non-null fields: {cycle}")]
    #[diagnostic(
        code(litmus::schema::unsatisfiable_cycle),
        help("make at least one field in the cycle nullable or a list")
    )]
    UnsatisfiableCycle { cycle: String },
}

/// Registry of named input types.
///
/// Every schema starts with the built-in scalars registered.
#[derive(Debug, Clone)]
pub struct Schema {
    types: IndexMap<String, NamedType>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl Schema {
    /// Create a schema holding only the built-in scalars.
    pub fn new() -> Self {
        let types = Scalar::ALL
            .into_iter()
            .map(|s| {
                (
                    s.as_str().to_string(),
                    NamedType::Leaf(Arc::new(s) as Arc<dyn LeafType>),
                )
            })
            .collect();
        Self { types }
    }

    fn insert(&mut self, ty: NamedType) -> Result<(), SchemaError> {
        let name = ty.name().to_string();
        if self.types.contains_key(&name) {
            return Err(SchemaError::DuplicateType { name });
        }
        log::debug!("registering {} type '{}'", ty.kind_str(), name);
        self.types.insert(name, ty);
        Ok(())
    }

    /// Register a custom leaf type.
    pub fn register_leaf(&mut self, leaf: impl LeafType + 'static) -> Result<(), SchemaError> {
        self.insert(NamedType::Leaf(Arc::new(leaf)))
    }

    pub fn register_enum(&mut self, enum_type: EnumType) -> Result<(), SchemaError> {
        self.register_leaf(enum_type)
    }

    pub fn register_input_object(&mut self, obj: InputObjectType) -> Result<(), SchemaError> {
        self.insert(NamedType::InputObject(obj))
    }

    /// Builder-style [`register_input_object`](Self::register_input_object).
    pub fn with_input_object(mut self, obj: InputObjectType) -> Result<Self, SchemaError> {
        self.register_input_object(obj)?;
        Ok(self)
    }

    /// Builder-style [`register_enum`](Self::register_enum).
    pub fn with_enum(mut self, enum_type: EnumType) -> Result<Self, SchemaError> {
        self.register_enum(enum_type)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// All registered types, built-ins first, then in registration order.
    pub fn types(&self) -> impl Iterator<Item = &NamedType> {
        self.types.values()
    }

    /// Input objects in registration order.
    pub fn input_objects(&self) -> impl Iterator<Item = &InputObjectType> {
        self.types.values().filter_map(|t| match t {
            NamedType::InputObject(obj) => Some(obj),
            NamedType::Leaf(_) => None,
        })
    }

    /// Classify a type reference.
    pub fn shape<'a>(&'a self, ty: &'a TypeRef) -> Result<Shape<'a>, SchemaError> {
        match ty {
            TypeRef::NonNull(inner) => Ok(Shape::NonNull(inner)),
            TypeRef::List(item) => Ok(Shape::List(item)),
            TypeRef::Named(name) => match self.types.get(name) {
                Some(NamedType::InputObject(obj)) => Ok(Shape::InputObject(obj)),
                Some(NamedType::Leaf(leaf)) => Ok(Shape::Leaf(leaf.as_ref())),
                None => Err(SchemaError::UnknownType {
                    name: name.clone(),
                    referenced_by: "type reference".to_string(),
                }),
            },
        }
    }

    /// Check that every field type resolves and that no input object
    /// requires itself through a chain of non-null fields.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for obj in self.input_objects() {
            for (field_name, field) in obj.fields() {
                let base = field.ty.base_name();
                if !self.contains(base) {
                    return Err(SchemaError::UnknownType {
                        name: base.to_string(),
                        referenced_by: format!("field '{}.{}'", obj.name(), field_name),
                    });
                }
            }
        }
        self.check_required_cycles()
    }

    fn check_required_cycles(&self) -> Result<(), SchemaError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Visiting,
            Done,
        }

        fn visit<'a>(
            schema: &'a Schema,
            obj: &'a InputObjectType,
            marks: &mut HashMap<&'a str, Mark>,
            trail: &mut Vec<String>,
        ) -> Result<(), SchemaError> {
            marks.insert(obj.name(), Mark::Visiting);
            for (field_name, field) in obj.fields() {
                let TypeRef::NonNull(inner) = &field.ty else {
                    continue;
                };
                let TypeRef::Named(target) = inner.as_ref() else {
                    continue;
                };
                let Some(NamedType::InputObject(next)) = schema.get(target) else {
                    continue;
                };

                trail.push(format!("{}.{}", obj.name(), field_name));
                match marks.get(next.name()).copied() {
                    Some(Mark::Visiting) => {
                        let mut cycle = trail.join(" -> ");
                        cycle.push_str(" -> ");
                        cycle.push_str(next.name());
                        return Err(SchemaError::UnsatisfiableCycle { cycle });
                    }
                    Some(Mark::Done) => {}
                    None => visit(schema, next, marks, trail)?,
                }
                trail.pop();
            }
            marks.insert(obj.name(), Mark::Done);
            Ok(())
        }

        let mut marks = HashMap::new();
        for obj in self.input_objects() {
            if !marks.contains_key(obj.name()) {
                visit(self, obj, &mut marks, &mut Vec::new())?;
            }
        }
        Ok(())
    }
}
