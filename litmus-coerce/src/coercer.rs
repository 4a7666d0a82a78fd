//! The type-directed literal coercer.

use std::collections::HashMap;

use indexmap::IndexMap;
use litmus_ir::{Literal, LiteralKind, ObjectField, TypeRef, Value};
use litmus_schema::{InputObjectType, LeafType, Schema, Shape};

use crate::{CoercionError, Path, Result, Variables};

/// What to do with a variable reference missing from the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnresolvedVariable {
    /// Treat it as an explicit `null` (never `Undefined`).
    #[default]
    Null,
    /// Fail with [`CoercionError::UnresolvedVariable`].
    Error,
}

/// Coercion behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoerceOptions {
    pub unresolved_variables: UnresolvedVariable,
}

impl CoerceOptions {
    /// Options that reject references to undefined variables.
    pub fn strict() -> Self {
        Self {
            unresolved_variables: UnresolvedVariable::Error,
        }
    }
}

/// Coerces literals against types declared in a [`Schema`].
///
/// A `Coercer` only borrows the schema; it is cheap to create and can be
/// shared between threads.
#[derive(Debug, Clone, Copy)]
pub struct Coercer<'s> {
    schema: &'s Schema,
    options: CoerceOptions,
}

impl<'s> Coercer<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            options: CoerceOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CoerceOptions) -> Self {
        self.options = options;
        self
    }

    /// Coerce `literal` against the declared type `ty`.
    ///
    /// Either returns a fully shaped value or an error; never a partial
    /// object or array.
    pub fn coerce(&self, literal: &Literal, ty: &TypeRef, variables: &Variables) -> Result<Value> {
        self.coerce_at(literal, ty, variables, &Path::root())
    }

    fn coerce_at(
        &self,
        literal: &Literal,
        ty: &TypeRef,
        variables: &Variables,
        path: &Path,
    ) -> Result<Value> {
        log::trace!("coercing {} literal as {} at {}", literal.kind(), ty, path);

        // Non-null is unwrapped before variables are looked at; a variable
        // then short-circuits every other shape.
        match (self.schema.shape(ty), literal) {
            (Ok(Shape::NonNull(inner)), _) => self.coerce_at(literal, inner, variables, path),
            (_, Literal::Variable(name)) => self.resolve_variable(name, variables, path),
            (Err(_), _) => Err(CoercionError::unknown_type(ty.base_name(), path)),
            (Ok(Shape::List(item)), Literal::List(items)) => items
                .iter()
                .enumerate()
                .map(|(i, node)| self.coerce_at(node, item, variables, &path.index(i)))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            (Ok(Shape::List(item)), _) => {
                let single = self.coerce_at(literal, item, variables, &path.index(0))?;
                Ok(Value::Array(vec![single]))
            }
            (Ok(Shape::InputObject(obj)), Literal::Object(fields)) => {
                self.coerce_object(obj, fields, variables, path)
            }
            (Ok(Shape::InputObject(_)), other) => Err(CoercionError::shape_mismatch(
                LiteralKind::Object.as_str(),
                other.kind(),
                path,
            )),
            (Ok(Shape::Leaf(leaf)), _) => self.coerce_leaf(leaf, literal, path),
        }
    }

    fn resolve_variable(&self, name: &str, variables: &Variables, path: &Path) -> Result<Value> {
        if let Some(value) = variables.get(name) {
            return Ok(value.clone());
        }
        match self.options.unresolved_variables {
            UnresolvedVariable::Null => {
                log::debug!("variable '${}' at {} is not defined, using null", name, path);
                Ok(Value::Null)
            }
            UnresolvedVariable::Error => Err(CoercionError::unresolved_variable(name, path)),
        }
    }

    fn coerce_object(
        &self,
        obj: &InputObjectType,
        fields: &[ObjectField],
        variables: &Variables,
        path: &Path,
    ) -> Result<Value> {
        // Later assignments of the same name overwrite earlier ones.
        let supplied: HashMap<&str, &Literal> = fields
            .iter()
            .map(|f| (f.name.as_str(), &f.value))
            .collect();

        if log::log_enabled!(log::Level::Trace) {
            for field in fields.iter().filter(|f| obj.get_field(&f.name).is_none()) {
                log::trace!("ignoring undeclared field '{}' on {} at {}", field.name, obj.name(), path);
            }
        }

        let mut out = IndexMap::with_capacity(obj.fields().len());
        for (name, field) in obj.fields() {
            let value = match supplied.get(name.as_str()) {
                Some(node) => self.coerce_at(node, &field.ty, variables, &path.field(name))?,
                None => field.default.clone().unwrap_or(Value::Undefined),
            };
            out.insert(name.clone(), value);
        }
        Ok(Value::Object(out))
    }

    fn coerce_leaf(&self, leaf: &dyn LeafType, literal: &Literal, path: &Path) -> Result<Value> {
        leaf.parse_literal(literal)
            .map_err(|source| CoercionError::leaf_parse(leaf.name(), source, path))
    }
}

/// Coerce with default options.
///
/// Shorthand for `Coercer::new(schema).coerce(literal, ty, variables)`.
pub fn coerce_literal(
    schema: &Schema,
    literal: &Literal,
    ty: &TypeRef,
    variables: &Variables,
) -> Result<Value> {
    Coercer::new(schema).coerce(literal, ty, variables)
}
