//! Path resolution and the read/write/remove primitives.
//!
//! Every function walks the path token by token. At each step the value found
//! so far decides how the next token is read: a mapping looks it up as a key,
//! a sequence parses it as an index, anything else is a dead end.

use serde_json::{Map, Value};

use crate::document::Document;
use crate::error::{type_name, FieldError};
use crate::path::{checked_index, is_token_prefix, parse_index, FieldPath};

/// The container holding the value a path points at.
#[derive(Debug)]
pub enum ContainerRef<'a, D: ?Sized> {
    Root(&'a D),
    Mapping(&'a Map<String, Value>),
    Sequence(&'a Vec<Value>),
}

/// Mutable counterpart of [`ContainerRef`].
#[derive(Debug)]
pub enum ContainerMut<'a, D: ?Sized> {
    Root(&'a mut D),
    Mapping(&'a mut Map<String, Value>),
    Sequence(&'a mut Vec<Value>),
}

fn not_present(key: &str, path: &FieldPath) -> FieldError {
    FieldError::NotPresent {
        key: key.to_string(),
        path: path.to_string(),
    }
}

fn not_an_index(token: &str, path: &FieldPath) -> FieldError {
    FieldError::NotAnIndex {
        token: token.to_string(),
        path: path.to_string(),
    }
}

fn out_of_bounds(index: i64, len: usize, path: &FieldPath) -> FieldError {
    FieldError::IndexOutOfBounds {
        index,
        len,
        path: path.to_string(),
    }
}

fn cannot_resolve(key: &str, found: &Value, path: &FieldPath) -> FieldError {
    FieldError::CannotResolve {
        key: key.to_string(),
        found: type_name(found),
        path: path.to_string(),
    }
}

/// Read `token` out of a sequence, failing if it is not a valid index.
fn locate(len: usize, token: &str, allow_end: bool, path: &FieldPath) -> Result<usize, FieldError> {
    let index = parse_index(token).ok_or_else(|| not_an_index(token, path))?;
    checked_index(index, len, allow_end).ok_or_else(|| out_of_bounds(index, len, path))
}

fn step<'a>(current: &'a Value, token: &str, path: &FieldPath) -> Result<&'a Value, FieldError> {
    match current {
        Value::Object(map) => map.get(token).ok_or_else(|| not_present(token, path)),
        Value::Array(arr) => {
            let idx = locate(arr.len(), token, false, path)?;
            Ok(&arr[idx])
        }
        other => Err(cannot_resolve(token, other, path)),
    }
}

fn step_mut<'a>(
    current: &'a mut Value,
    token: &str,
    path: &FieldPath,
) -> Result<&'a mut Value, FieldError> {
    match current {
        Value::Object(map) => map.get_mut(token).ok_or_else(|| not_present(token, path)),
        Value::Array(arr) => {
            let idx = locate(arr.len(), token, false, path)?;
            Ok(&mut arr[idx])
        }
        other => Err(cannot_resolve(token, other, path)),
    }
}

/// Like [`step_mut`], but a missing mapping key is filled with an empty mapping.
fn step_or_create<'a>(
    current: &'a mut Value,
    token: &str,
    path: &FieldPath,
) -> Result<&'a mut Value, FieldError> {
    match current {
        Value::Object(map) => Ok(map
            .entry(token.to_string())
            .or_insert_with(|| Value::Object(Map::new()))),
        other => step_mut(other, token, path),
    }
}

/// Find the container of the value addressed by `path`.
///
/// Walks every token except the last and returns the container reached
/// together with that last token.
///
/// # Errors
///
/// Fails if an intermediate key is absent, an intermediate index is invalid,
/// or a token has to be read out of a scalar.
///
/// # Example
///
/// ```
/// use ingest_field_path::{resolve, ContainerRef, FieldPath};
/// use serde_json::json;
///
/// let doc = json!({"list": [1, 2]}).as_object().cloned().unwrap();
/// let path = FieldPath::parse("list.1").unwrap();
/// let (container, leaf) = resolve(&doc, &path).unwrap();
/// assert!(matches!(container, ContainerRef::Sequence(items) if items.len() == 2));
/// assert_eq!(leaf, "1");
/// ```
pub fn resolve<'a, 'p, D>(
    doc: &'a D,
    path: &'p FieldPath,
) -> Result<(ContainerRef<'a, D>, &'p str), FieldError>
where
    D: Document + ?Sized,
{
    let leaf = path.leaf();
    let Some((first, rest)) = path.parent_tokens().split_first() else {
        return Ok((ContainerRef::Root(doc), leaf));
    };
    let mut current = doc.get(first).ok_or_else(|| not_present(first, path))?;
    for token in rest {
        current = step(current, token, path)?;
    }
    let container = match current {
        Value::Object(map) => ContainerRef::Mapping(map),
        Value::Array(arr) => ContainerRef::Sequence(arr),
        other => return Err(cannot_resolve(leaf, other, path)),
    };
    Ok((container, leaf))
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'a, 'p, D>(
    doc: &'a mut D,
    path: &'p FieldPath,
) -> Result<(ContainerMut<'a, D>, &'p str), FieldError>
where
    D: Document + ?Sized,
{
    let leaf = path.leaf();
    let Some((first, rest)) = path.parent_tokens().split_first() else {
        return Ok((ContainerMut::Root(doc), leaf));
    };
    let mut current = doc.get_mut(first).ok_or_else(|| not_present(first, path))?;
    for token in rest {
        current = step_mut(current, token, path)?;
    }
    into_container(current, leaf, path)
}

fn resolve_for_write<'a, 'p, D>(
    doc: &'a mut D,
    path: &'p FieldPath,
) -> Result<(ContainerMut<'a, D>, &'p str), FieldError>
where
    D: Document + ?Sized,
{
    let leaf = path.leaf();
    let Some((first, rest)) = path.parent_tokens().split_first() else {
        return Ok((ContainerMut::Root(doc), leaf));
    };
    if !doc.contains_key(first) {
        doc.put(first, Value::Object(Map::new()))?;
    }
    let mut current = doc.get_mut(first).ok_or_else(|| not_present(first, path))?;
    for token in rest {
        current = step_or_create(current, token, path)?;
    }
    into_container(current, leaf, path)
}

fn into_container<'a, 'p, D: ?Sized>(
    current: &'a mut Value,
    leaf: &'p str,
    path: &FieldPath,
) -> Result<(ContainerMut<'a, D>, &'p str), FieldError> {
    match current {
        Value::Object(map) => Ok((ContainerMut::Mapping(map), leaf)),
        Value::Array(arr) => Ok((ContainerMut::Sequence(arr), leaf)),
        other => Err(cannot_resolve(leaf, other, path)),
    }
}

/// Get the value at `path`.
///
/// # Errors
///
/// - [`FieldError::NotPresent`] if a mapping key is absent
/// - [`FieldError::IndexOutOfBounds`] if a sequence index is negative or `>= len`
/// - [`FieldError::NotAnIndex`] / [`FieldError::CannotResolve`] for paths that
///   do not fit the document's shape
///
/// # Example
///
/// ```
/// use ingest_field_path::{get, FieldPath};
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": [10, 20]}}).as_object().cloned().unwrap();
/// let path = FieldPath::parse("foo.bar.1").unwrap();
/// assert_eq!(get(&doc, &path).unwrap(), &json!(20));
/// ```
pub fn get<'a, D>(doc: &'a D, path: &FieldPath) -> Result<&'a Value, FieldError>
where
    D: Document + ?Sized,
{
    let (container, leaf) = resolve(doc, path)?;
    match container {
        ContainerRef::Root(root) => root.get(leaf).ok_or_else(|| not_present(leaf, path)),
        ContainerRef::Mapping(map) => map.get(leaf).ok_or_else(|| not_present(leaf, path)),
        ContainerRef::Sequence(arr) => {
            let idx = locate(arr.len(), leaf, false, path)?;
            Ok(&arr[idx])
        }
    }
}

/// Check whether `path` addresses an existing value.
///
/// Unlike [`get`], nothing here is an error: an out-of-range or non-numeric
/// index and a scalar on the way all count as "not present". A field holding
/// `null` is present.
///
/// # Example
///
/// ```
/// use ingest_field_path::{has_field, FieldPath};
/// use serde_json::json;
///
/// let doc = json!({"a": null, "list": [1]}).as_object().cloned().unwrap();
/// assert!(has_field(&doc, &FieldPath::parse("a").unwrap()));
/// assert!(!has_field(&doc, &FieldPath::parse("list.1").unwrap()));
/// assert!(!has_field(&doc, &FieldPath::parse("a.b").unwrap()));
/// ```
pub fn has_field<D>(doc: &D, path: &FieldPath) -> bool
where
    D: Document + ?Sized,
{
    get(doc, path).is_ok()
}

/// Tokens of `path` with every sequence index written in canonical form.
///
/// Index tokens are parsed as integers, so `0`, `00` and `+0` address the same
/// element. Each token that lands on a sequence is rewritten to its plain
/// decimal form. Once the walk leaves the document the remaining tokens are
/// kept as written, since writes only ever create mappings there.
///
/// # Example
///
/// ```
/// use ingest_field_path::{canonical_tokens, FieldPath};
/// use serde_json::json;
///
/// let doc = json!({"list": [{"a": 1}]}).as_object().cloned().unwrap();
/// let path = FieldPath::parse("list.+00.a.new").unwrap();
/// assert_eq!(canonical_tokens(&doc, &path), ["list", "0", "a", "new"]);
/// ```
pub fn canonical_tokens<D>(doc: &D, path: &FieldPath) -> Vec<String>
where
    D: Document + ?Sized,
{
    let tokens = path.tokens();
    let mut canonical = Vec::with_capacity(tokens.len());
    let Some((first, rest)) = tokens.split_first() else {
        return canonical;
    };
    canonical.push(first.clone());
    let mut current = doc.get(first);
    for token in rest {
        current = match current {
            Some(Value::Array(arr)) => {
                match parse_index(token).and_then(|index| usize::try_from(index).ok()) {
                    Some(idx) => {
                        canonical.push(idx.to_string());
                        arr.get(idx)
                    }
                    None => {
                        canonical.push(token.clone());
                        None
                    }
                }
            }
            Some(Value::Object(map)) => {
                canonical.push(token.clone());
                map.get(token.as_str())
            }
            _ => {
                canonical.push(token.clone());
                None
            }
        };
    }
    canonical
}

/// Check if `inner` addresses a value nested strictly inside `outer`.
///
/// Unlike [`FieldPath::is_prefix_of`] this compares the paths as `doc` would
/// read them, so `list.00.b` lies inside `list.0`.
pub fn encloses<D>(doc: &D, outer: &FieldPath, inner: &FieldPath) -> bool
where
    D: Document + ?Sized,
{
    is_token_prefix(&canonical_tokens(doc, outer), &canonical_tokens(doc, inner))
}

/// Write `value` at `path`.
///
/// A mapping leaf is inserted or overwritten. A sequence leaf is overwritten
/// when the index is in range and appended when it equals the length. Missing
/// intermediate mapping keys are created as empty mappings; sequences are
/// never grown on the way down.
///
/// # Errors
///
/// - [`FieldError::IndexOutOfBounds`] if a sequence index is negative or `> len`
/// - [`FieldError::CannotResolve`] if the path runs through a scalar
/// - whatever the root [`Document`] returns when it refuses the write
///
/// # Example
///
/// ```
/// use ingest_field_path::{get, set, FieldPath};
/// use serde_json::{json, Map};
///
/// let mut doc = Map::new();
/// let path = FieldPath::parse("a.b").unwrap();
/// set(&mut doc, &path, json!(1)).unwrap();
/// assert_eq!(serde_json::Value::Object(doc), json!({"a": {"b": 1}}));
/// ```
pub fn set<D>(doc: &mut D, path: &FieldPath, value: Value) -> Result<(), FieldError>
where
    D: Document + ?Sized,
{
    let (container, leaf) = resolve_for_write(doc, path)?;
    match container {
        ContainerMut::Root(root) => {
            root.put(leaf, value)?;
        }
        ContainerMut::Mapping(map) => {
            map.insert(leaf.to_string(), value);
        }
        ContainerMut::Sequence(arr) => {
            let idx = locate(arr.len(), leaf, true, path)?;
            if idx == arr.len() {
                arr.push(value);
            } else {
                arr[idx] = value;
            }
        }
    }
    Ok(())
}

/// Remove the value at `path` and return it.
///
/// Removing a sequence element shifts the following elements one slot to the
/// left.
///
/// # Errors
///
/// - [`FieldError::NotPresent`] if the key is absent
/// - [`FieldError::IndexOutOfBounds`] if the index is negative or `>= len`
/// - whatever the root [`Document`] returns when it refuses the removal
///
/// # Example
///
/// ```
/// use ingest_field_path::{remove, FieldPath};
/// use serde_json::json;
///
/// let mut doc = json!({"list": ["a", "b", "c"]}).as_object().cloned().unwrap();
/// let removed = remove(&mut doc, &FieldPath::parse("list.0").unwrap()).unwrap();
/// assert_eq!(removed, json!("a"));
/// assert_eq!(doc["list"], json!(["b", "c"]));
/// ```
pub fn remove<D>(doc: &mut D, path: &FieldPath) -> Result<Value, FieldError>
where
    D: Document + ?Sized,
{
    let (container, leaf) = resolve_mut(doc, path)?;
    match container {
        ContainerMut::Root(root) => {
            if !root.contains_key(leaf) {
                return Err(not_present(leaf, path));
            }
            root.remove(leaf)?.ok_or_else(|| not_present(leaf, path))
        }
        ContainerMut::Mapping(map) => map.shift_remove(leaf).ok_or_else(|| not_present(leaf, path)),
        ContainerMut::Sequence(arr) => {
            let idx = locate(arr.len(), leaf, false, path)?;
            Ok(arr.remove(idx))
        }
    }
}
