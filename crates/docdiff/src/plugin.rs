//! Plugin wiring: configuration, per-document tracking sessions, and the
//! observer interface onto a host document model.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diff::compute_diff;
use crate::document::Document;
use crate::schema::Schema;
use crate::select::{select_paths, EligiblePaths};
use crate::snapshot::Snapshot;

/// Plugin configuration.
///
/// Deserializes from the host's configuration surface with camelCase keys;
/// missing fields fall back to defaults and unknown fields are ignored, so
/// configuration never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiffOptions {
    /// Schema-metadata marker consulted when no explicit paths are given.
    pub option_key: String,
    /// Explicit eligible paths; overrides schema scanning entirely.
    pub paths: Option<Vec<String>>,
    /// Name under which the diff-producing method is exposed.
    pub method_name: String,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            option_key: "diff".to_string(),
            paths: None,
            method_name: "getDiff".to_string(),
        }
    }
}

/// The host surface the plugin installs onto.
///
/// An explicit observer interface: the host fires the checkpoint callback
/// after load-complete and after persist-complete, and dispatches defined
/// methods by name on tracked documents.
pub trait Host {
    fn on_checkpoint(&mut self, callback: Box<dyn FnMut(&dyn Document)>);
    fn define_method(&mut self, name: &str, method: Box<dyn Fn(&dyn Document) -> Value>);
}

/// Per-document-type diff configuration: the eligible path set, selected
/// once at construction and immutable thereafter.
#[derive(Debug, Clone)]
pub struct DiffPlugin {
    options: DiffOptions,
    eligible: EligiblePaths,
}

impl DiffPlugin {
    pub fn new(schema: &Schema, options: DiffOptions) -> Self {
        let eligible = select_paths(schema, &options);
        DiffPlugin { options, eligible }
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn eligible_paths(&self) -> &EligiblePaths {
        &self.eligible
    }

    /// Start a tracking session for one document instance.
    pub fn session(&self) -> Session {
        Session {
            eligible: self.eligible.clone(),
            snapshot: Snapshot::empty(),
        }
    }

    /// Wire the plugin into a host: checkpoints recapture the snapshot, and
    /// the diff method is exposed under `options.method_name`.
    ///
    /// Every document instance gets its own session, created the first time
    /// it flows through a checkpoint or a diff query and keyed by
    /// [`Document::instance_id`] — no two documents share a snapshot
    /// baseline. The session map is shared between the two callbacks; all
    /// host dispatch is single-threaded and synchronous.
    pub fn install<H: Host>(&self, host: &mut H) {
        let sessions: Rc<RefCell<HashMap<u64, Session>>> = Rc::new(RefCell::new(HashMap::new()));

        let eligible = self.eligible.clone();
        let on_checkpoint = Rc::clone(&sessions);
        host.on_checkpoint(Box::new(move |doc| {
            let mut sessions = on_checkpoint.borrow_mut();
            session_for(&mut sessions, &eligible, doc).checkpoint(doc);
        }));

        let eligible = self.eligible.clone();
        let on_query = Rc::clone(&sessions);
        host.define_method(
            &self.options.method_name,
            Box::new(move |doc| {
                let mut sessions = on_query.borrow_mut();
                session_for(&mut sessions, &eligible, doc).diff(doc)
            }),
        );
    }
}

fn session_for<'a>(
    sessions: &'a mut HashMap<u64, Session>,
    eligible: &EligiblePaths,
    doc: &dyn Document,
) -> &'a mut Session {
    sessions.entry(doc.instance_id()).or_insert_with(|| Session {
        eligible: eligible.clone(),
        snapshot: Snapshot::empty(),
    })
}

/// Tracking session for one document instance.
///
/// Owns the snapshot slot: created empty at tracking setup, replaced
/// wholesale at every checkpoint, dropped with the document.
#[derive(Debug, Clone)]
pub struct Session {
    eligible: EligiblePaths,
    snapshot: Snapshot,
}

impl Session {
    /// Replace the snapshot with the document's current values.
    pub fn checkpoint(&mut self, doc: &dyn Document) {
        self.snapshot = Snapshot::capture(doc, &self.eligible);
    }

    /// Prior values for every modified, eligible path.
    pub fn diff(&self, doc: &dyn Document) -> Value {
        compute_diff(doc, &self.snapshot, &self.eligible)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}
