//! Field operation descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single edit to apply to a document.
///
/// Serialized with an `op` tag, e.g.
/// `{"op": "rename", "field": "a", "target_field": "b"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FieldOp {
    Set { field: String, value: Value },
    Remove { field: String },
    Rename { field: String, target_field: String },
}

impl FieldOp {
    pub fn set(field: impl Into<String>, value: Value) -> Self {
        FieldOp::Set {
            field: field.into(),
            value,
        }
    }

    pub fn remove(field: impl Into<String>) -> Self {
        FieldOp::Remove {
            field: field.into(),
        }
    }

    pub fn rename(field: impl Into<String>, target_field: impl Into<String>) -> Self {
        FieldOp::Rename {
            field: field.into(),
            target_field: target_field.into(),
        }
    }

    /// One `Set` per entry of a field-to-value map.
    pub fn set_all<I, K>(fields: I) -> Vec<FieldOp>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        fields
            .into_iter()
            .map(|(field, value)| FieldOp::set(field, value))
            .collect()
    }

    /// One `Rename` per entry of a source-to-target map.
    pub fn rename_all<I, K, T>(fields: I) -> Vec<FieldOp>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        fields
            .into_iter()
            .map(|(field, target)| FieldOp::rename(field, target))
            .collect()
    }

    pub fn op_name(&self) -> &'static str {
        match self {
            FieldOp::Set { .. } => "set",
            FieldOp::Remove { .. } => "remove",
            FieldOp::Rename { .. } => "rename",
        }
    }

    /// The field the operation reads or writes first.
    pub fn field(&self) -> &str {
        match self {
            FieldOp::Set { field, .. }
            | FieldOp::Remove { field }
            | FieldOp::Rename { field, .. } => field,
        }
    }
}
