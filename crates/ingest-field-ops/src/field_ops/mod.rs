//! Field operations: set, remove and rename.
//!
//! Every operation parses its paths on each call and edits the document only
//! through the resolver primitives in `ingest_field_path`. Rename is the one
//! compound operation; see [`rename`] for what happens when half of it fails.

pub mod apply;
pub mod types;

pub use apply::{apply_op, apply_ops, remove, rename, set};
pub use types::FieldOp;
