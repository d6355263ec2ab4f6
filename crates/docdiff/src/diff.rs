//! Diff computation: prior values for every modified, eligible path.

use docdiff_field_path as field_path;
use serde_json::{Map, Value};

use crate::document::Document;
use crate::select::EligiblePaths;
use crate::snapshot::Snapshot;

/// Build the nested tree of prior values for paths that both changed and
/// are eligible.
///
/// A pure read: neither the snapshot nor the document is mutated. With a
/// non-empty eligible set, a modified path qualifies when its wildcard
/// normalization is a member; the direct/indirect flag is ignored. In
/// whole-document mode (empty eligible set) only directly modified paths
/// qualify, so a parent is not reported merely because a descendant
/// changed. The two rules are deliberately different.
///
/// Prior values are read at the concrete, index-preserving path; a path
/// the snapshot holds no value for contributes `null`, the absent marker.
/// Qualifying paths are written into one tree in the order the host
/// reports them; shared prefixes merge. When nothing qualifies the result
/// is the empty object.
pub fn compute_diff(doc: &dyn Document, snapshot: &Snapshot, eligible: &EligiblePaths) -> Value {
    let mut diff = Value::Object(Map::new());
    for path in doc.modified_paths() {
        if !qualifies(doc, &path, eligible) {
            continue;
        }
        let segments = field_path::parse(&path);
        if segments.is_empty() {
            continue;
        }
        let prior = snapshot
            .value_at(&segments)
            .cloned()
            .unwrap_or(Value::Null);
        field_path::set(&mut diff, &segments, prior);
    }
    diff
}

fn qualifies(doc: &dyn Document, path: &str, eligible: &EligiblePaths) -> bool {
    if eligible.is_empty() {
        doc.is_directly_modified(path)
    } else {
        eligible.contains(field_path::normalize(path).as_str())
    }
}
