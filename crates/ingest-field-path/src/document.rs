//! The root container capability.

use serde_json::{Map, Value};

use crate::error::FieldError;

/// Root mapping of a document.
///
/// The resolver touches the top level only through this trait, so a backing
/// store that refuses some writes or deletions can be substituted for the
/// plain [`Map`]. Nested mappings and sequences are ordinary [`Value`]s.
///
/// Implementations report refusals with [`FieldError::WriteRejected`] and
/// [`FieldError::RemoveRejected`]; the resolver passes them through as-is.
pub trait Document {
    fn get(&self, key: &str) -> Option<&Value>;

    fn get_mut(&mut self, key: &str) -> Option<&mut Value>;

    /// Insert or overwrite `key`, returning the previous value.
    fn put(&mut self, key: &str, value: Value) -> Result<Option<Value>, FieldError>;

    /// Delete `key`, returning its value, or `None` if it was absent.
    fn remove(&mut self, key: &str) -> Result<Option<Value>, FieldError>;

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl Document for Map<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        Map::get(self, key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        Map::get_mut(self, key)
    }

    fn put(&mut self, key: &str, value: Value) -> Result<Option<Value>, FieldError> {
        Ok(self.insert(key.to_string(), value))
    }

    fn remove(&mut self, key: &str) -> Result<Option<Value>, FieldError> {
        // shift_remove keeps the order of the remaining keys.
        Ok(self.shift_remove(key))
    }
}
