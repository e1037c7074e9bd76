//! Field edits for nested JSON documents.
//!
//! Built on the dotted-path resolver in [`ingest_field_path`]:
//!
//! - [`set`] writes a value, creating missing parent mappings
//! - [`remove`] deletes a value and returns it
//! - [`rename`] moves a value, writing the destination before removing the
//!   source so a failure never drops data
//!
//! Operations can also be described as data with [`FieldOp`] and applied in
//! bulk with [`apply_ops`]. The `field-ops` binary exposes the same thing on
//! the command line; its logic lives in [`cli`].
//!
//! # Example
//!
//! ```
//! use ingest_field_ops::{apply_ops, FieldOp};
//! use serde_json::json;
//!
//! let mut doc = json!({"host": "a", "tags": ["x"]}).as_object().cloned().unwrap();
//! let ops = vec![
//!     FieldOp::rename("host", "source.host"),
//!     FieldOp::set("tags.1", json!("y")),
//! ];
//! apply_ops(&mut doc, &ops).unwrap();
//! assert_eq!(
//!     serde_json::Value::Object(doc),
//!     json!({"tags": ["x", "y"], "source": {"host": "a"}})
//! );
//! ```

pub mod cli;
pub mod field_ops;

pub use field_ops::{apply_op, apply_ops, remove, rename, set, FieldOp};
pub use ingest_field_path::{Document, ErrorKind, FieldError, FieldPath};
