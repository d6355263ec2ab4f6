use serde_json::{Map, Value};

use crate::is_index;

/// Write a value at a concrete path, creating intermediate levels as needed.
///
/// A numeric segment creates (or extends, null-padded) an array; any other
/// segment creates an object. Paths sharing a common prefix merge into the
/// same nested structure. An existing non-container at an intermediate level
/// is replaced by the container the path requires.
///
/// # Example
///
/// ```
/// use docdiff_field_path::{parse, set};
/// use serde_json::json;
///
/// let mut tree = json!({});
/// set(&mut tree, &parse("name.first"), json!("Ada"));
/// set(&mut tree, &parse("name.last"), json!("Lovelace"));
/// set(&mut tree, &parse("nicknames.0.name"), json!("Al"));
/// assert_eq!(
///     tree,
///     json!({
///         "name": {"first": "Ada", "last": "Lovelace"},
///         "nicknames": [{"name": "Al"}]
///     })
/// );
/// ```
pub fn set(root: &mut Value, path: &[String], value: Value) {
    let Some((head, rest)) = path.split_first() else {
        *root = value;
        return;
    };

    if is_index(head) {
        let idx: usize = match head.parse() {
            Ok(i) => i,
            Err(_) => return,
        };
        if !matches!(root, Value::Array(_)) {
            *root = Value::Array(Vec::new());
        }
        if let Value::Array(arr) = root {
            if arr.len() <= idx {
                arr.resize(idx + 1, Value::Null);
            }
            if rest.is_empty() {
                arr[idx] = value;
            } else {
                set(&mut arr[idx], rest, value);
            }
        }
    } else {
        if !matches!(root, Value::Object(_)) {
            *root = Value::Object(Map::new());
        }
        if let Value::Object(map) = root {
            if rest.is_empty() {
                map.insert(head.clone(), value);
            } else {
                let slot = map.entry(head.clone()).or_insert(Value::Null);
                set(slot, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use serde_json::json;

    #[test]
    fn test_set_root() {
        let mut tree = json!({});
        set(&mut tree, &[], json!({"replaced": true}));
        assert_eq!(tree, json!({"replaced": true}));
    }

    #[test]
    fn test_set_top_level_key() {
        let mut tree = json!({});
        set(&mut tree, &parse("username"), json!("ada"));
        assert_eq!(tree, json!({"username": "ada"}));
    }

    #[test]
    fn test_set_creates_intermediate_objects() {
        let mut tree = json!({});
        set(&mut tree, &parse("name.first"), json!("Ada"));
        assert_eq!(tree, json!({"name": {"first": "Ada"}}));
    }

    #[test]
    fn test_set_merges_shared_prefix() {
        let mut tree = json!({});
        set(&mut tree, &parse("name.first"), json!("Ada"));
        set(&mut tree, &parse("name.last"), json!("Lovelace"));
        assert_eq!(tree, json!({"name": {"first": "Ada", "last": "Lovelace"}}));
    }

    #[test]
    fn test_set_creates_array_for_index() {
        let mut tree = json!({});
        set(&mut tree, &parse("nicknames.0.name"), json!("Al"));
        assert_eq!(tree, json!({"nicknames": [{"name": "Al"}]}));
    }

    #[test]
    fn test_set_pads_array_with_null() {
        let mut tree = json!({});
        set(&mut tree, &parse("nicknames.2.name"), json!("Cy"));
        assert_eq!(tree, json!({"nicknames": [null, null, {"name": "Cy"}]}));
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let mut tree = json!({"username": "ada"});
        set(&mut tree, &parse("username"), json!("grace"));
        assert_eq!(tree, json!({"username": "grace"}));
    }

    #[test]
    fn test_set_replaces_scalar_intermediate() {
        let mut tree = json!({"name": "flat"});
        set(&mut tree, &parse("name.first"), json!("Ada"));
        assert_eq!(tree, json!({"name": {"first": "Ada"}}));
    }

    #[test]
    fn test_set_null_value() {
        let mut tree = json!({});
        set(&mut tree, &parse("email"), Value::Null);
        assert_eq!(tree, json!({"email": null}));
    }
}
