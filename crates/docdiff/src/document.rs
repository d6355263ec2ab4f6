//! The read/query surface the host document model exposes to the engine.

use serde_json::Value;

/// A tracked document instance, as seen by the engine.
///
/// The host model owns mutation and dirty-tracking; the engine only reads.
pub trait Document {
    /// A key identifying this document instance for as long as it is
    /// tracked. Two live instances never share a key; tracking sessions are
    /// keyed by it so no two documents share a snapshot baseline.
    fn instance_id(&self) -> u64;

    /// The document's current value tree.
    ///
    /// With `depopulate` set, references to related documents collapse to
    /// their raw identifiers instead of the expanded documents.
    fn to_plain_value(&self, depopulate: bool) -> Value;

    /// Dotted paths the document considers changed since the last
    /// checkpoint. Order is host-defined; the engine evaluates each path
    /// independently.
    fn modified_paths(&self) -> Vec<String>;

    /// Whether `path` was literally set, as opposed to modified only
    /// because an ancestor or descendant changed.
    fn is_directly_modified(&self, path: &str) -> bool;
}
