//! Validation for dotted field-path strings.
//!
//! Advisory only: the diff engine never rejects host-reported paths, but a
//! configuration layer can use [`validate`] to flag typos up front.

use thiserror::Error;

use crate::SEPARATOR;

/// Maximum allowed path depth.
const MAX_DEPTH: usize = 32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldPathError {
    #[error("EMPTY_PATH")]
    EmptyPath,
    #[error("EMPTY_SEGMENT")]
    EmptySegment,
    #[error("PATH_TOO_DEEP")]
    PathTooDeep,
}

/// Validate a dotted field-path string.
///
/// # Errors
///
/// - [`FieldPathError::EmptyPath`] for the empty string
/// - [`FieldPathError::EmptySegment`] for leading/trailing/double dots
/// - [`FieldPathError::PathTooDeep`] beyond 32 segments
///
/// # Example
///
/// ```
/// use docdiff_field_path::validate;
///
/// validate("name.first").unwrap();
/// validate("nicknames.$.name").unwrap();
/// validate("name..first").unwrap_err();
/// validate(".name").unwrap_err();
/// ```
pub fn validate(path: &str) -> Result<(), FieldPathError> {
    if path.is_empty() {
        return Err(FieldPathError::EmptyPath);
    }
    let mut depth = 0;
    for segment in path.split(SEPARATOR) {
        if segment.is_empty() {
            return Err(FieldPathError::EmptySegment);
        }
        depth += 1;
    }
    if depth > MAX_DEPTH {
        return Err(FieldPathError::PathTooDeep);
    }
    Ok(())
}
