//! Applying field operations to a document.

use ingest_field_path::{self as path, Document, FieldError, FieldPath};
use serde_json::Value;
use tracing::{debug, warn};

use super::types::FieldOp;

/// Write `value` at `field`, creating missing parent mappings.
pub fn set<D>(doc: &mut D, field: &str, value: Value) -> Result<(), FieldError>
where
    D: Document + ?Sized,
{
    let target = FieldPath::parse(field)?;
    debug!(field, "set field");
    path::set(doc, &target, value)
}

/// Remove `field` and return the value it held.
pub fn remove<D>(doc: &mut D, field: &str) -> Result<Value, FieldError>
where
    D: Document + ?Sized,
{
    let target = FieldPath::parse(field)?;
    debug!(field, "remove field");
    path::remove(doc, &target)
}

/// Move the value at `field` to `target_field`.
///
/// The value is written at the destination first and removed from the source
/// afterwards:
///
/// - if the write fails, the document is left untouched;
/// - if the removal fails, the error is returned and the destination is kept,
///   so the value then lives at both paths. The value is never lost.
///
/// Renaming an element of a sequence shifts the following elements left.
///
/// # Errors
///
/// - [`FieldError::DoesNotExist`] if `field` does not resolve, whether the key
///   is absent, the index is out of range or a scalar is in the way
/// - [`FieldError::AlreadyExists`] if `target_field` holds a value, including
///   when it equals `field`
/// - [`FieldError::NestedDestination`] if `target_field` lies inside `field`,
///   comparing sequence indices by value (`list.00.b` lies inside `list.0`)
/// - any resolver or container error from the write or the removal
///
/// # Example
///
/// ```
/// use ingest_field_ops::rename;
/// use serde_json::json;
///
/// let mut doc = json!({"list": ["item1", "item2", "item3"]}).as_object().cloned().unwrap();
/// rename(&mut doc, "list.0", "item").unwrap();
/// assert_eq!(
///     serde_json::Value::Object(doc),
///     json!({"list": ["item2", "item3"], "item": "item1"})
/// );
/// ```
pub fn rename<D>(doc: &mut D, field: &str, target_field: &str) -> Result<(), FieldError>
where
    D: Document + ?Sized,
{
    let source = FieldPath::parse(field)?;
    let destination = FieldPath::parse(target_field)?;

    if !path::has_field(&*doc, &source) {
        return Err(FieldError::DoesNotExist {
            path: source.to_string(),
        });
    }
    if path::has_field(&*doc, &destination) {
        return Err(FieldError::AlreadyExists {
            path: destination.to_string(),
        });
    }
    if path::encloses(&*doc, &source, &destination) {
        return Err(FieldError::NestedDestination {
            source_path: source.to_string(),
            destination: destination.to_string(),
        });
    }

    let value = path::get(&*doc, &source)?.clone();
    path::set(doc, &destination, value)?;
    debug!(field, target_field, "rename wrote destination");

    if let Err(err) = path::remove(doc, &source) {
        warn!(
            field,
            target_field,
            error = %err,
            "rename could not remove source, value is now present at both paths"
        );
        return Err(err);
    }
    debug!(field, target_field, "rename complete");
    Ok(())
}

/// Apply a single operation.
///
/// Returns the removed value for [`FieldOp::Remove`], `None` otherwise.
pub fn apply_op<D>(doc: &mut D, op: &FieldOp) -> Result<Option<Value>, FieldError>
where
    D: Document + ?Sized,
{
    match op {
        FieldOp::Set { field, value } => set(doc, field, value.clone()).map(|_| None),
        FieldOp::Remove { field } => remove(doc, field).map(Some),
        FieldOp::Rename {
            field,
            target_field,
        } => rename(doc, field, target_field).map(|_| None),
    }
}

/// Apply operations in order, stopping at the first failure.
///
/// Operations applied before the failing one are not undone.
pub fn apply_ops<D>(doc: &mut D, ops: &[FieldOp]) -> Result<(), FieldError>
where
    D: Document + ?Sized,
{
    for (index, op) in ops.iter().enumerate() {
        if let Err(err) = apply_op(doc, op) {
            debug!(index, op = op.op_name(), field = op.field(), error = %err, "field op failed");
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingest_field_path::ErrorKind;
    use serde_json::{json, Map};

    fn doc(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_set_and_remove() {
        let mut d = doc(json!({}));
        set(&mut d, "a.b", json!(1)).unwrap();
        assert_eq!(remove(&mut d, "a.b").unwrap(), json!(1));
        assert_eq!(Value::Object(d), json!({"a": {}}));
    }

    #[test]
    fn test_set_rejects_empty_path() {
        let mut d = doc(json!({}));
        assert_eq!(set(&mut d, "", json!(1)), Err(FieldError::EmptyPath));
    }

    #[test]
    fn test_rename_top_level() {
        let mut d = doc(json!({"a": 1, "b": 2}));
        rename(&mut d, "a", "c").unwrap();
        assert_eq!(Value::Object(d), json!({"b": 2, "c": 1}));
    }

    #[test]
    fn test_rename_into_new_nested_mapping() {
        let mut d = doc(json!({"a": {"x": true}}));
        rename(&mut d, "a.x", "b.c.d").unwrap();
        assert_eq!(Value::Object(d), json!({"a": {}, "b": {"c": {"d": true}}}));
    }

    #[test]
    fn test_rename_onto_itself() {
        let mut d = doc(json!({"a": 1}));
        let err = rename(&mut d, "a", "a").unwrap_err();
        assert_eq!(err.to_string(), "field [a] already exists");
        assert_eq!(Value::Object(d), json!({"a": 1}));
    }

    #[test]
    fn test_rename_into_own_child() {
        let mut d = doc(json!({"a": {"x": 1}}));
        let err = rename(&mut d, "a", "a.y").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPathElement);
        assert_eq!(Value::Object(d), json!({"a": {"x": 1}}));
    }

    #[test]
    fn test_rename_into_own_child_through_index_alias() {
        for target in ["list.00.b", "list.+0.b", "list.-0.b"] {
            let mut d = doc(json!({"list": [{"a": 1}]}));
            let err = rename(&mut d, "list.0", target).unwrap_err();
            assert!(matches!(err, FieldError::NestedDestination { .. }), "{target}: {err}");
            assert_eq!(Value::Object(d), json!({"list": [{"a": 1}]}), "{target}");
        }

        let mut d = doc(json!({"list": [{"a": 1}]}));
        let err = rename(&mut d, "list.+0", "list.0.b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPathElement);
        assert_eq!(Value::Object(d), json!({"list": [{"a": 1}]}));
    }

    #[test]
    fn test_rename_source_that_does_not_resolve() {
        let mut d = doc(json!({"list": [1], "s": "text"}));
        for source in ["list.4", "list.-1", "list.x", "s.x", "missing.x"] {
            let err = rename(&mut d, source, "x").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::FieldNotFound, "{source}");
            assert_eq!(err.to_string(), format!("field [{source}] doesn't exist"));
        }
        assert_eq!(Value::Object(d), json!({"list": [1], "s": "text"}));
    }

    #[test]
    fn test_rename_destination_through_scalar() {
        let mut d = doc(json!({"a": 1, "s": "text"}));
        let err = rename(&mut d, "a", "s.x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPathElement);
        assert_eq!(Value::Object(d), json!({"a": 1, "s": "text"}));
    }

    #[test]
    fn test_rename_within_sequence() {
        let mut d = doc(json!({"list": ["a", "b"]}));
        rename(&mut d, "list.0", "list.2").unwrap();
        assert_eq!(d["list"], json!(["b", "a"]));
    }

    #[test]
    fn test_apply_op_returns_removed_value() {
        let mut d = doc(json!({"a": 1}));
        assert_eq!(apply_op(&mut d, &FieldOp::remove("a")).unwrap(), Some(json!(1)));
        assert_eq!(apply_op(&mut d, &FieldOp::set("b", json!(2))).unwrap(), None);
    }

    #[test]
    fn test_apply_ops_stops_at_first_failure() {
        let mut d = doc(json!({"a": 1}));
        let ops = vec![
            FieldOp::set("b", json!(2)),
            FieldOp::rename("missing", "c"),
            FieldOp::remove("a"),
        ];
        let err = apply_ops(&mut d, &ops).unwrap_err();
        assert_eq!(err.to_string(), "field [missing] doesn't exist");
        assert_eq!(Value::Object(d), json!({"a": 1, "b": 2}));
    }
}
