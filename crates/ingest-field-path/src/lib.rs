//! Dotted field paths over nested JSON documents.
//!
//! A path like `foo.list.0.name` is split on `.`; each token is read as a key
//! when the value it applies to is a mapping and as an index when it is a
//! sequence. On top of that this crate offers the primitives every field edit
//! is built from: [`get`], [`has_field`], [`set`] and [`remove`].
//!
//! The top-level mapping is reached through the [`Document`] trait, which is
//! implemented for `serde_json::Map<String, Value>`.
//!
//! # Example
//!
//! ```
//! use ingest_field_path::{get, has_field, remove, set, FieldPath};
//! use serde_json::json;
//!
//! let mut doc = json!({"user": {"tags": ["a", "b"]}}).as_object().cloned().unwrap();
//!
//! let tag = FieldPath::parse("user.tags.0").unwrap();
//! assert_eq!(get(&doc, &tag).unwrap(), &json!("a"));
//!
//! set(&mut doc, &FieldPath::parse("user.name").unwrap(), json!("ann")).unwrap();
//! assert_eq!(remove(&mut doc, &tag).unwrap(), json!("a"));
//! assert_eq!(doc["user"], json!({"tags": ["b"], "name": "ann"}));
//! assert!(!has_field(&doc, &FieldPath::parse("user.tags.1").unwrap()));
//! ```

pub mod document;
pub mod error;
pub mod path;
pub mod resolve;
pub mod validate;

pub use document::Document;
pub use error::{ErrorKind, FieldError};
pub use path::{is_token_prefix, FieldPath, SEPARATOR};
pub use resolve::{
    canonical_tokens, encloses, get, has_field, remove, resolve, resolve_mut, set, ContainerMut,
    ContainerRef,
};
pub use validate::{validate_path, MAX_PATH_DEPTH};
