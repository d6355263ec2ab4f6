//! Typed field descriptors for document schemas.
//!
//! The host model's per-field declaration metadata becomes a typed
//! capability here: each declared field carries a [`FieldKind`] describing
//! its shape and an open-ended options map holding declaration-time
//! metadata such as the `diff` eligibility marker.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// The shape of a single declared field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A plain leaf value (string, number, boolean, date, ...).
    Scalar,
    /// A link to another document; depopulates to its raw identifier.
    Reference,
    /// An embedded sub-schema (plain nested object).
    Object(Schema),
    /// An array of leaf values.
    ArrayOfScalars,
    /// An array of structured elements, addressed by wildcard paths.
    ArrayOfObjects(Schema),
}

/// A declared field: its shape plus arbitrary declaration-time metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub kind: FieldKind,
    pub options: Map<String, Value>,
}

impl Field {
    pub fn new(kind: FieldKind) -> Self {
        Field {
            kind,
            options: Map::new(),
        }
    }

    pub fn scalar() -> Self {
        Self::new(FieldKind::Scalar)
    }

    pub fn reference() -> Self {
        Self::new(FieldKind::Reference)
    }

    pub fn object(schema: Schema) -> Self {
        Self::new(FieldKind::Object(schema))
    }

    pub fn array_of_scalars() -> Self {
        Self::new(FieldKind::ArrayOfScalars)
    }

    pub fn array_of_objects(schema: Schema) -> Self {
        Self::new(FieldKind::ArrayOfObjects(schema))
    }

    /// Attach a declaration-time option.
    pub fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Shorthand for the default `diff` eligibility marker.
    ///
    /// # Example
    ///
    /// ```
    /// use docdiff::{Field, is_field_marked_for_diff};
    ///
    /// let field = Field::scalar().diff(true);
    /// assert!(is_field_marked_for_diff(&field, "diff"));
    /// ```
    pub fn diff(self, on: bool) -> Self {
        self.option("diff", Value::Bool(on))
    }
}

/// An ordered set of field declarations.
///
/// Schemas are finite, owned trees: a schema cannot reference itself, so
/// recursion over one always terminates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    fields: IndexMap<String, Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field, builder style. Redeclaring a name replaces it.
    ///
    /// # Example
    ///
    /// ```
    /// use docdiff::{Field, Schema};
    ///
    /// let schema = Schema::new()
    ///     .field("username", Field::scalar())
    ///     .field("name", Field::object(
    ///         Schema::new()
    ///             .field("first", Field::scalar())
    ///             .field("last", Field::scalar()),
    ///     ));
    /// assert!(schema.get("username").is_some());
    /// ```
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Field)> {
        self.fields.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Check whether a field's metadata carries a truthy marker under `option_key`.
pub fn is_field_marked_for_diff(field: &Field, option_key: &str) -> bool {
    field.options.get(option_key).is_some_and(truthy)
}

/// JS-style truthiness: absent, `null`, `false`, `0`, and `""` are falsy.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
