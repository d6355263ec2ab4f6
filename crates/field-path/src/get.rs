use serde_json::Value;

use crate::WILDCARD;

/// Get a value from a document tree by concrete path.
///
/// Objects are traversed by key, arrays by numeric index. Returns `None` for
/// a wildcard segment (only concrete paths address values), for an index out
/// of bounds, and for any segment/container mismatch.
///
/// # Example
///
/// ```
/// use docdiff_field_path::{get, parse};
/// use serde_json::json;
///
/// let doc = json!({"nicknames": [{"name": "Al"}, {"name": "Bo"}]});
/// assert_eq!(get(&doc, &parse("nicknames.1.name")), Some(&json!("Bo")));
/// assert_eq!(get(&doc, &parse("nicknames.2.name")), None);
/// assert_eq!(get(&doc, &parse("nicknames.$.name")), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(val);
    }

    let mut current = val;
    for segment in path {
        match current {
            Value::Array(arr) => {
                if segment == WILDCARD {
                    return None;
                }
                let idx: usize = match segment.parse() {
                    Ok(i) => i,
                    Err(_) => return None,
                };
                current = arr.get(idx)?;
            }
            Value::Object(map) => {
                current = map.get(segment)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Get a mutable reference to a value in a document tree by concrete path.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    if path.is_empty() {
        return Some(val);
    }

    let mut current = val;
    for segment in path {
        match current {
            Value::Array(arr) => {
                if segment == WILDCARD {
                    return None;
                }
                let idx: usize = segment.parse().ok()?;
                current = arr.get_mut(idx)?;
            }
            Value::Object(map) => {
                current = map.get_mut(segment)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
