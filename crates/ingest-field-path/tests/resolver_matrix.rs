use ingest_field_path::{
    get, has_field, remove, set, Document, ErrorKind, FieldError, FieldPath,
};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn doc(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("object")
}

fn path(s: &str) -> FieldPath {
    FieldPath::parse(s).expect("valid path")
}

/// A root mapping whose top-level keys are read-only.
struct Frozen(Map<String, Value>);

impl Document for Frozen {
    fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    fn put(&mut self, key: &str, _value: Value) -> Result<Option<Value>, FieldError> {
        Err(FieldError::WriteRejected {
            key: key.to_string(),
            reason: "frozen".to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> Result<Option<Value>, FieldError> {
        Err(FieldError::RemoveRejected {
            key: key.to_string(),
            reason: "frozen".to_string(),
        })
    }
}

#[test]
fn resolver_read_matrix() {
    let d = doc(json!({
        "a": {"b": [10, {"c": null}, [1, 2]]},
        "s": "text",
        "n": null
    }));

    assert_eq!(get(&d, &path("a.b.0")).unwrap(), &json!(10));
    assert_eq!(get(&d, &path("a.b.1.c")).unwrap(), &Value::Null);
    assert_eq!(get(&d, &path("a.b.2.1")).unwrap(), &json!(2));

    let cases = [
        ("a.x", ErrorKind::FieldNotFound),
        ("x.y", ErrorKind::FieldNotFound),
        ("a.b.3", ErrorKind::IndexOutOfBounds),
        ("a.b.-1", ErrorKind::IndexOutOfBounds),
        ("a.b.2.5", ErrorKind::IndexOutOfBounds),
        ("a.b.one", ErrorKind::InvalidPathElement),
        ("s.x", ErrorKind::InvalidPathElement),
        ("n.x", ErrorKind::InvalidPathElement),
        ("a.b.0.x", ErrorKind::InvalidPathElement),
    ];
    for (p, kind) in cases {
        let err = get(&d, &path(p)).unwrap_err();
        assert_eq!(err.kind(), kind, "path {p}: {err}");
        assert!(!has_field(&d, &path(p)), "path {p}");
    }
}

#[test]
fn resolver_indices_follow_current_length() {
    let mut d = doc(json!({"list": ["a", "b", "c"]}));
    remove(&mut d, &path("list.0")).unwrap();
    assert!(!has_field(&d, &path("list.2")));
    assert_eq!(get(&d, &path("list.0")).unwrap(), &json!("b"));
    assert_eq!(get(&d, &path("list.1")).unwrap(), &json!("c"));
}

#[test]
fn resolver_works_through_trait_object() {
    let mut d = doc(json!({"a": 1}));
    let dynamic: &mut dyn Document = &mut d;
    set(dynamic, &path("b.c"), json!(2)).unwrap();
    assert_eq!(get(&*dynamic, &path("b.c")).unwrap(), &json!(2));
    assert_eq!(remove(dynamic, &path("a")).unwrap(), json!(1));
    assert_eq!(Value::Object(d), json!({"b": {"c": 2}}));
}

#[test]
fn rejected_root_write_is_propagated() {
    let mut d = Frozen(doc(json!({"list": ["item"]})));

    let err = set(&mut d, &path("new_field"), json!(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnderlyingWriteFailure);

    // Creating a missing parent goes through the root as well.
    let err = set(&mut d, &path("new.field"), json!(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnderlyingWriteFailure);
    assert_eq!(Value::Object(d.0.clone()), json!({"list": ["item"]}));

    // Below the root, values are plain JSON and stay writable.
    set(&mut d, &path("list.1"), json!("more")).unwrap();
    assert_eq!(d.0["list"], json!(["item", "more"]));
}

#[test]
fn rejected_root_remove_is_propagated() {
    let mut d = Frozen(doc(json!({"list": ["item"]})));

    let err = remove(&mut d, &path("list")).unwrap_err();
    assert_eq!(
        err,
        FieldError::RemoveRejected {
            key: "list".to_string(),
            reason: "frozen".to_string()
        }
    );
    assert!(has_field(&d, &path("list")));

    // Absent keys are reported as missing before the container is asked.
    let err = remove(&mut d, &path("other")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldNotFound);
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn prop_get_after_set_returns_value(
        keys in proptest::collection::vec("[a-z]{1,5}", 1..5),
        value in scalar(),
    ) {
        let mut d = Map::new();
        let p = path(&keys.join("."));
        set(&mut d, &p, value.clone()).unwrap();
        prop_assert_eq!(get(&d, &p).unwrap(), &value);
    }

    #[test]
    fn prop_removed_field_is_gone(
        keys in proptest::collection::vec("[a-z]{1,5}", 1..5),
        value in scalar(),
    ) {
        let mut d = Map::new();
        let p = path(&keys.join("."));
        set(&mut d, &p, value.clone()).unwrap();
        prop_assert_eq!(remove(&mut d, &p).unwrap(), value);
        prop_assert!(!has_field(&d, &p));
    }

    #[test]
    fn prop_sequence_remove_shifts_left(
        items in proptest::collection::vec(any::<i64>(), 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let idx = pick.index(items.len());
        let mut d = doc(json!({"list": items.clone()}));
        let removed = remove(&mut d, &path(&format!("list.{idx}"))).unwrap();
        prop_assert_eq!(removed, json!(items[idx]));

        let mut expected = items.clone();
        expected.remove(idx);
        prop_assert_eq!(&d["list"], &json!(expected));
    }
}
