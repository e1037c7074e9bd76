//! Core logic of the `field-ops` binary.
//!
//! Kept separate from `main` so it can be tested without spawning a process.

use serde_json::Value;
use thiserror::Error;

use crate::field_ops::{apply_ops, FieldOp};
use ingest_field_path::{error::type_name, FieldError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("document must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("{0}")]
    Field(#[from] FieldError),
}

/// Apply a JSON array of field operations to a JSON object.
///
/// Returns the edited document serialized as compact JSON.
///
/// # Example
///
/// ```
/// use ingest_field_ops::cli::apply_field_ops;
///
/// let out = apply_field_ops(
///     r#"{"a": 1}"#,
///     r#"[{"op": "rename", "field": "a", "target_field": "b"}]"#,
/// )
/// .unwrap();
/// assert_eq!(out, r#"{"b":1}"#);
/// ```
pub fn apply_field_ops(doc_json: &str, ops_json: &str) -> Result<String, CliError> {
    let ops: Vec<FieldOp> = serde_json::from_str(ops_json)?;
    let mut doc = match serde_json::from_str::<Value>(doc_json)? {
        Value::Object(map) => map,
        other => return Err(CliError::NotAnObject(type_name(&other))),
    };
    apply_ops(&mut doc, &ops)?;
    Ok(serde_json::to_string(&Value::Object(doc))?)
}
