//! Random documents and field names for exercising field operations.
//!
//! Test-only helpers: nothing in the engine crates depends on this one.
//!
//! - `document.rs` builds nested mappings and sequences from weighted node odds
//! - `names.rs` picks fresh or existing dotted field names
//! - `fuzzer.rs` bundles both behind a seeded, replayable PRNG

pub mod document;
pub mod fuzzer;
pub mod names;

pub use document::{depth, NodeOdds, NodeType, RandomDocument, RandomDocumentOptions};
pub use fuzzer::DocumentFuzzer;
pub use names::{can_add_field, random_existing_field_name, random_field_name};
