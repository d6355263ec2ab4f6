//! Dotted field-path utilities.
//!
//! A field path addresses a scalar or nested field in a document value tree
//! with `.`-separated segments, e.g. `name.first`. A path that traverses an
//! array of structured elements may use the wildcard segment `$` to stand
//! for "any element index", e.g. `nicknames.$.name`. A concrete path
//! reported by a document (`nicknames.2.name`) is brought into wildcard form
//! with [`normalize`].
//!
//! # Example
//!
//! ```
//! use docdiff_field_path::{format, get, normalize, parse};
//!
//! let path = parse("name.first");
//! assert_eq!(path, vec!["name".to_string(), "first".to_string()]);
//! assert_eq!(format(&path), "name.first");
//!
//! assert_eq!(normalize("nicknames.2.name"), "nicknames.$.name");
//!
//! let doc = serde_json::json!({"name": {"first": "Ada"}});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!("Ada")));
//! ```

pub mod get;
pub mod set;
pub mod validate;

pub use get::{get, get_mut};
pub use set::set;
pub use validate::{validate, FieldPathError};

/// The reserved array-wildcard segment: stands for "any element index".
pub const WILDCARD: &str = "$";

/// The segment separator.
pub const SEPARATOR: char = '.';

/// Parse a dotted field-path string into its segments.
///
/// The empty string parses to the empty (root) path.
///
/// # Example
///
/// ```
/// use docdiff_field_path::parse;
///
/// assert_eq!(parse(""), Vec::<String>::new());
/// assert_eq!(parse("username"), vec!["username"]);
/// assert_eq!(parse("nicknames.0.name"), vec!["nicknames", "0", "name"]);
/// ```
pub fn parse(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split(SEPARATOR).map(str::to_string).collect()
}

/// Format path segments back into a dotted string.
///
/// The empty (root) path formats to the empty string.
///
/// # Example
///
/// ```
/// use docdiff_field_path::format;
///
/// assert_eq!(format(&[]), "");
/// assert_eq!(format(&["name".to_string(), "first".to_string()]), "name.first");
/// ```
pub fn format(path: &[String]) -> String {
    path.join(".")
}

/// Check if a segment is a purely-numeric array index.
///
/// # Example
///
/// ```
/// use docdiff_field_path::is_index;
///
/// assert!(is_index("0"));
/// assert!(is_index("12"));
/// assert!(!is_index("name"));
/// assert!(!is_index("$"));
/// assert!(!is_index(""));
/// assert!(!is_index("-1"));
/// ```
pub fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Replace every purely-numeric segment with the wildcard marker.
///
/// This brings a concrete modified path into the form used by eligible-path
/// matching.
///
/// # Example
///
/// ```
/// use docdiff_field_path::normalize;
///
/// assert_eq!(normalize("nicknames.2.name"), "nicknames.$.name");
/// assert_eq!(normalize("name.first"), "name.first");
/// ```
pub fn normalize(path: &str) -> String {
    let segments: Vec<&str> = path
        .split(SEPARATOR)
        .map(|segment| if is_index(segment) { WILDCARD } else { segment })
        .collect();
    segments.join(".")
}

/// Check whether a path contains a wildcard segment.
pub fn has_wildcard(path: &[String]) -> bool {
    path.iter().any(|segment| segment == WILDCARD)
}

/// The segments before the first wildcard.
///
/// Array indices are unknown when eligible paths are selected, so a wildcard
/// path addresses its parent array as a whole; this is that parent path.
///
/// # Example
///
/// ```
/// use docdiff_field_path::{parse, wildcard_prefix};
///
/// let path = parse("nicknames.$.name");
/// assert_eq!(wildcard_prefix(&path), &["nicknames".to_string()]);
///
/// let plain = parse("name.first");
/// assert_eq!(wildcard_prefix(&plain), plain.as_slice());
/// ```
pub fn wildcard_prefix(path: &[String]) -> &[String] {
    match path.iter().position(|segment| segment == WILDCARD) {
        Some(at) => &path[..at],
        None => path,
    }
}
