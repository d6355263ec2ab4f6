//! Path selection: which field paths are eligible for diffing.

use docdiff_field_path::WILDCARD;
use indexmap::IndexSet;

use crate::plugin::DiffOptions;
use crate::schema::{is_field_marked_for_diff, FieldKind, Schema};

/// The set of dotted, possibly-wildcarded paths eligible for diffing.
///
/// Unique and insertion-ordered; computed once per configuration and
/// immutable thereafter. The empty set is a distinguished value meaning
/// "track the whole document", not "track nothing".
pub type EligiblePaths = IndexSet<String>;

/// Compute the eligible path set for a schema and configuration.
///
/// Explicit `options.paths` are used verbatim (deduplicated, order
/// preserved) and the schema is never inspected. Otherwise every field
/// whose declaration metadata carries a truthy marker under
/// `options.option_key` contributes its fully-qualified path; sub-schemas
/// are prefixed with `parent.`, array-of-structured-element fields with
/// `parent.$.`.
///
/// # Example
///
/// ```
/// use docdiff::{select_paths, DiffOptions, Field, Schema};
///
/// let schema = Schema::new()
///     .field("username", Field::scalar().diff(true))
///     .field("nicknames", Field::array_of_objects(
///         Schema::new().field("name", Field::scalar().diff(true)),
///     ));
/// let eligible = select_paths(&schema, &DiffOptions::default());
/// assert!(eligible.contains("username"));
/// assert!(eligible.contains("nicknames.$.name"));
/// ```
pub fn select_paths(schema: &Schema, options: &DiffOptions) -> EligiblePaths {
    if let Some(paths) = &options.paths {
        return paths.iter().cloned().collect();
    }
    let mut eligible = EligiblePaths::new();
    collect(schema, &options.option_key, "", &mut eligible);
    eligible
}

fn collect(schema: &Schema, option_key: &str, prefix: &str, eligible: &mut EligiblePaths) {
    for (name, field) in schema.fields() {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        if is_field_marked_for_diff(field, option_key) {
            eligible.insert(path.clone());
        }
        match &field.kind {
            FieldKind::Object(sub) => collect(sub, option_key, &path, eligible),
            FieldKind::ArrayOfObjects(sub) => {
                collect(sub, option_key, &format!("{path}.{WILDCARD}"), eligible);
            }
            FieldKind::Scalar | FieldKind::Reference | FieldKind::ArrayOfScalars => {}
        }
    }
}
