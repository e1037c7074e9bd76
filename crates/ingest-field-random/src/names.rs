//! Random field names, fresh or picked from an existing document.

use ingest_field_path::{FieldPath, SEPARATOR};
use rand::seq::IteratorRandom;
use rand::Rng;
use serde_json::{Map, Value};

use crate::document::RandomDocument;

/// A dotted name of one to three random keys.
pub fn random_field_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let separator = SEPARATOR.to_string();
    let tokens = rng.gen_range(1..=3);
    (0..tokens)
        .map(|_| RandomDocument::gen_key(rng))
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Pick the path of a field that exists in `doc`.
///
/// Descends through nested mappings until it reaches a value that is not a
/// non-empty mapping, so the returned paths never contain one another.
/// Sequences are treated as leaves. Returns `None` for an empty document.
pub fn random_existing_field_name<R: Rng + ?Sized>(
    rng: &mut R,
    doc: &Map<String, Value>,
) -> Option<String> {
    let mut current = doc;
    let mut tokens: Vec<&str> = Vec::new();
    loop {
        let (key, value) = current.iter().choose(rng)?;
        tokens.push(key);
        match value {
            Value::Object(map) if !map.is_empty() => current = map,
            _ => break,
        }
    }
    let separator = SEPARATOR.to_string();
    Some(tokens.join(separator.as_str()))
}

/// Check whether `field` could be written without overwriting anything.
///
/// True when every existing prefix of the path is a mapping and the final key
/// is absent. Paths that would need to index into a sequence are rejected.
pub fn can_add_field(field: &str, doc: &Map<String, Value>) -> bool {
    let Ok(path) = FieldPath::parse(field) else {
        return false;
    };
    let mut current = doc;
    for token in path.parent_tokens() {
        match current.get(token.as_str()) {
            None => return true,
            Some(Value::Object(map)) => current = map,
            Some(_) => return false,
        }
    }
    !current.contains_key(path.leaf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingest_field_path::has_field;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    use serde_json::json;

    fn doc(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn field_name_has_one_to_three_tokens() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(9);
        for _ in 0..100 {
            let name = random_field_name(&mut rng);
            let depth = FieldPath::parse(&name).unwrap().depth();
            assert!((1..=3).contains(&depth), "{name}");
        }
    }

    #[test]
    fn existing_field_name_resolves() {
        let d = doc(json!({
            "a": {"b": {"c": 1}, "e": {}},
            "list": [1, 2],
            "n": null
        }));
        let mut rng = Xoshiro256StarStar::seed_from_u64(21);
        for _ in 0..100 {
            let name = random_existing_field_name(&mut rng, &d).unwrap();
            assert!(["a.b.c", "a.e", "list", "n"].contains(&name.as_str()), "{name}");
            assert!(has_field(&d, &FieldPath::parse(&name).unwrap()));
        }
    }

    #[test]
    fn existing_field_name_of_empty_document() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        assert_eq!(random_existing_field_name(&mut rng, &Map::new()), None);
    }

    #[test]
    fn can_add_field_matrix() {
        let d = doc(json!({"a": {"b": 1}, "s": "text", "list": []}));
        assert!(can_add_field("x", &d));
        assert!(can_add_field("x.y.z", &d));
        assert!(can_add_field("a.c", &d));
        assert!(can_add_field("a.c.d", &d));
        assert!(!can_add_field("a", &d));
        assert!(!can_add_field("a.b", &d));
        assert!(!can_add_field("a.b.c", &d));
        assert!(!can_add_field("s.x", &d));
        assert!(!can_add_field("list.0", &d));
        assert!(!can_add_field("", &d));
    }
}
