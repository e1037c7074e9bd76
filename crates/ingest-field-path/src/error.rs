//! Error type shared by path resolution and field operations.

use serde_json::Value;
use thiserror::Error;

/// Coarse classification of a [`FieldError`].
///
/// Several variants map onto the same kind; callers that only care whether a
/// field was missing or an index was bad should match on this instead of the
/// individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FieldNotFound,
    IndexOutOfBounds,
    InvalidPathElement,
    FieldAlreadyExists,
    UnderlyingWriteFailure,
    UnderlyingRemoveFailure,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("field [{key}] not present as part of path [{path}]")]
    NotPresent { key: String, path: String },

    #[error("field [{path}] doesn't exist")]
    DoesNotExist { path: String },

    #[error("[{index}] is out of bounds for array with length [{len}] as part of path [{path}]")]
    IndexOutOfBounds { index: i64, len: usize, path: String },

    #[error("[{token}] is not an integer, cannot be used as an index as part of path [{path}]")]
    NotAnIndex { token: String, path: String },

    #[error("cannot resolve [{key}] from object of type [{found}] as part of path [{path}]")]
    CannotResolve {
        key: String,
        found: &'static str,
        path: String,
    },

    #[error("path cannot be null nor empty")]
    EmptyPath,

    #[error("path [{path}] has {depth} elements, the maximum is {max}")]
    PathTooLong {
        path: String,
        depth: usize,
        max: usize,
    },

    #[error("cannot rename [{source_path}] into its own child [{destination}]")]
    NestedDestination {
        source_path: String,
        destination: String,
    },

    #[error("field [{path}] already exists")]
    AlreadyExists { path: String },

    #[error("cannot write field [{key}]: {reason}")]
    WriteRejected { key: String, reason: String },

    #[error("cannot remove field [{key}]: {reason}")]
    RemoveRejected { key: String, reason: String },
}

impl FieldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::NotPresent { .. } | FieldError::DoesNotExist { .. } => {
                ErrorKind::FieldNotFound
            }
            FieldError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            FieldError::NotAnIndex { .. }
            | FieldError::CannotResolve { .. }
            | FieldError::EmptyPath
            | FieldError::PathTooLong { .. }
            | FieldError::NestedDestination { .. } => ErrorKind::InvalidPathElement,
            FieldError::AlreadyExists { .. } => ErrorKind::FieldAlreadyExists,
            FieldError::WriteRejected { .. } => ErrorKind::UnderlyingWriteFailure,
            FieldError::RemoveRejected { .. } => ErrorKind::UnderlyingRemoveFailure,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::FieldNotFound`.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::FieldNotFound
    }
}

/// Name of a value's type as it appears in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
