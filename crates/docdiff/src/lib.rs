//! docdiff — change-tracking snapshot/diff engine for structured documents.
//!
//! Capture a document's field values at a checkpoint (load-complete or
//! persist-complete), then compute which of a restricted set of fields
//! changed and what their prior values were. The host document model owns
//! mutation and dirty-tracking; it feeds the engine a modified-path report
//! and a plain value tree (see [`Document`]).
//!
//! Eligible paths come from an explicit list or from a truthy `diff` marker
//! in the schema's field metadata; paths through arrays of structured
//! elements use the `$` wildcard segment (`nicknames.$.name`). An empty
//! eligible set means "track the whole document".
//!
//! # Example
//!
//! ```
//! use docdiff::{DiffOptions, DiffPlugin, Document, Field, Schema};
//! use serde_json::{json, Value};
//!
//! struct Doc {
//!     values: Value,
//!     modified: Vec<(String, bool)>,
//! }
//!
//! impl Document for Doc {
//!     fn instance_id(&self) -> u64 {
//!         0
//!     }
//!     fn to_plain_value(&self, _depopulate: bool) -> Value {
//!         self.values.clone()
//!     }
//!     fn modified_paths(&self) -> Vec<String> {
//!         self.modified.iter().map(|(p, _)| p.clone()).collect()
//!     }
//!     fn is_directly_modified(&self, path: &str) -> bool {
//!         self.modified.iter().any(|(p, direct)| p == path && *direct)
//!     }
//! }
//!
//! let schema = Schema::new()
//!     .field("username", Field::scalar().diff(true))
//!     .field("password", Field::scalar());
//!
//! let plugin = DiffPlugin::new(&schema, DiffOptions::default());
//! let mut session = plugin.session();
//!
//! let mut doc = Doc {
//!     values: json!({"username": "ada", "password": "x"}),
//!     modified: Vec::new(),
//! };
//! session.checkpoint(&doc);
//!
//! doc.values["username"] = json!("grace");
//! doc.modified.push(("username".to_string(), true));
//!
//! assert_eq!(session.diff(&doc), json!({"username": "ada"}));
//! ```

pub mod diff;
pub mod document;
pub mod plugin;
pub mod schema;
pub mod select;
pub mod snapshot;

pub use diff::compute_diff;
pub use document::Document;
pub use plugin::{DiffOptions, DiffPlugin, Host, Session};
pub use schema::{is_field_marked_for_diff, Field, FieldKind, Schema};
pub use select::{select_paths, EligiblePaths};
pub use snapshot::Snapshot;
