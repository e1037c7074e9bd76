//! Path validation.

use crate::error::FieldError;
use crate::path::FieldPath;

/// Maximum number of tokens in a path.
pub const MAX_PATH_DEPTH: usize = 256;

/// Validate a parsed path.
///
/// # Errors
///
/// Returns [`FieldError::PathTooLong`] if the path has more than
/// [`MAX_PATH_DEPTH`] tokens.
///
/// # Example
///
/// ```
/// use ingest_field_path::FieldPath;
///
/// let deep = vec!["a"; 300].join(".");
/// assert!(FieldPath::parse(&deep).is_err());
/// ```
pub fn validate_path(path: &FieldPath) -> Result<(), FieldError> {
    if path.depth() > MAX_PATH_DEPTH {
        return Err(FieldError::PathTooLong {
            path: path.as_str().to_string(),
            depth: path.depth(),
            max: MAX_PATH_DEPTH,
        });
    }
    Ok(())
}
