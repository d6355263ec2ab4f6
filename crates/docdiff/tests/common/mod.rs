#![allow(dead_code)]

//! Simulated host model: a mutable document with dirty-tracking and a host
//! that dispatches checkpoint events and defined methods.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use docdiff::{Document, Host};
use docdiff_field_path as field_path;
use indexmap::IndexMap;
use serde_json::{json, Value};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// A mutable document that records its own modified paths the way the host
/// model does: a set path is directly modified, its proper ancestors
/// indirectly so.
pub struct SimDocument {
    id: u64,
    values: Value,
    populated: Vec<(String, Value)>,
    // path -> directly modified
    modified: IndexMap<String, bool>,
}

impl SimDocument {
    pub fn new(values: Value) -> Self {
        SimDocument {
            id: NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed),
            values,
            populated: Vec::new(),
            modified: IndexMap::new(),
        }
    }

    pub fn value_at(&self, path: &str) -> Option<Value> {
        field_path::get(&self.values, &field_path::parse(path)).cloned()
    }

    /// Set a value, recording the path as directly modified.
    pub fn set(&mut self, path: &str, value: Value) {
        field_path::set(&mut self.values, &field_path::parse(path), value);
        self.mark(path);
    }

    /// Remove the value at a path (array slots become null), recording the
    /// path as directly modified.
    pub fn unset(&mut self, path: &str) {
        let segments = field_path::parse(path);
        if let Some((last, parent)) = segments.split_last() {
            if let Some(node) = field_path::get_mut(&mut self.values, parent) {
                match node {
                    Value::Object(map) => {
                        map.remove(last);
                    }
                    Value::Array(arr) => {
                        if let Ok(idx) = last.parse::<usize>() {
                            if idx < arr.len() {
                                arr[idx] = Value::Null;
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
        self.mark(path);
    }

    /// Append to an array field, recording the array itself as directly
    /// modified (push semantics in the host model).
    pub fn push(&mut self, path: &str, value: Value) {
        let segments = field_path::parse(path);
        let exists = matches!(
            field_path::get(&self.values, &segments),
            Some(Value::Array(_))
        );
        if exists {
            if let Some(Value::Array(arr)) = field_path::get_mut(&mut self.values, &segments) {
                arr.push(value);
            }
        } else {
            field_path::set(&mut self.values, &segments, json!([value]));
        }
        self.mark(path);
    }

    /// Attach an expanded related document; `to_plain_value(false)` expands
    /// it, `to_plain_value(true)` keeps the stored identifier.
    pub fn populate(&mut self, path: &str, expanded: Value) {
        self.populated.push((path.to_string(), expanded));
    }

    /// Reset dirty state, as the host does after load and successful save.
    pub fn clear_modified(&mut self) {
        self.modified.clear();
    }

    fn mark(&mut self, path: &str) {
        let segments = field_path::parse(path);
        for depth in 1..segments.len() {
            let ancestor = field_path::format(&segments[..depth]);
            self.modified.entry(ancestor).or_insert(false);
        }
        self.modified.insert(path.to_string(), true);
    }
}

impl Document for SimDocument {
    fn instance_id(&self) -> u64 {
        self.id
    }

    fn to_plain_value(&self, depopulate: bool) -> Value {
        let mut tree = self.values.clone();
        if !depopulate {
            for (path, expanded) in &self.populated {
                field_path::set(&mut tree, &field_path::parse(path), expanded.clone());
            }
        }
        tree
    }

    fn modified_paths(&self) -> Vec<String> {
        self.modified.keys().cloned().collect()
    }

    fn is_directly_modified(&self, path: &str) -> bool {
        self.modified.get(path).copied().unwrap_or(false)
    }
}

/// Dispatches checkpoint events and defined methods to installed plugins.
#[derive(Default)]
pub struct SimHost {
    checkpoint_callbacks: Vec<Box<dyn FnMut(&dyn Document)>>,
    methods: HashMap<String, Box<dyn Fn(&dyn Document) -> Value>>,
}

impl SimHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire_checkpoint(&mut self, doc: &dyn Document) {
        for callback in &mut self.checkpoint_callbacks {
            callback(doc);
        }
    }

    pub fn call(&self, name: &str, doc: &dyn Document) -> Option<Value> {
        self.methods.get(name).map(|method| method(doc))
    }
}

impl Host for SimHost {
    fn on_checkpoint(&mut self, callback: Box<dyn FnMut(&dyn Document)>) {
        self.checkpoint_callbacks.push(callback);
    }

    fn define_method(&mut self, name: &str, method: Box<dyn Fn(&dyn Document) -> Value>) {
        self.methods.insert(name.to_string(), method);
    }
}

/// A completed load or save: the host fires the checkpoint observers and
/// the document's dirty state resets.
pub fn persist(host: &mut SimHost, doc: &mut SimDocument) {
    host.fire_checkpoint(doc);
    doc.clear_modified();
}

pub fn user_data() -> Value {
    json!({
        "username": "ada",
        "password": "correct-horse",
        "name": {"first": "Ada", "last": "Lovelace"},
        "emails": ["ada@example.com"]
    })
}
