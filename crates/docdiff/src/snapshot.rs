//! Snapshot store: checkpointed prior values for one tracked document.

use docdiff_field_path as field_path;
use serde_json::{Map, Value};

use crate::document::Document;
use crate::select::EligiblePaths;

/// A deep, depopulated copy of a document's field values at a checkpoint.
///
/// Replaced wholesale on every checkpoint; never merged. Owned by exactly
/// one tracking session.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    tree: Value,
}

impl Snapshot {
    /// The empty snapshot held before the first checkpoint.
    pub fn empty() -> Self {
        Snapshot {
            tree: Value::Object(Map::new()),
        }
    }

    /// Capture the document's current values.
    ///
    /// With a non-empty eligible set, only the subtrees reachable through
    /// the listed paths are retained. A wildcard path retains its parent
    /// array wholesale, since element indices are unknown at selection time
    /// and later lookups address concrete slots. Capture never fails; an
    /// empty document yields an empty-valued snapshot.
    pub fn capture(doc: &dyn Document, eligible: &EligiblePaths) -> Self {
        let full = doc.to_plain_value(true);
        if eligible.is_empty() {
            return Snapshot { tree: full };
        }
        let mut tree = Value::Object(Map::new());
        for path in eligible {
            let segments = field_path::parse(path);
            let prefix = field_path::wildcard_prefix(&segments);
            if let Some(value) = field_path::get(&full, prefix) {
                field_path::set(&mut tree, prefix, value.clone());
            }
        }
        Snapshot { tree }
    }

    /// Prior value at a concrete (index-preserving) path, if the snapshot
    /// holds one.
    pub fn value_at(&self, path: &[String]) -> Option<&Value> {
        field_path::get(&self.tree, path)
    }

    pub fn tree(&self) -> &Value {
        &self.tree
    }
}
