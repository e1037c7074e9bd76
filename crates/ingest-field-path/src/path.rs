//! Dotted field paths.

use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;
use crate::validate::validate_path;

/// Separator between path tokens. There is no escape sequence for it.
pub const SEPARATOR: char = '.';

/// A parsed dotted path such as `foo.bar.0`.
///
/// Holds the original text (used verbatim in error messages) next to the
/// split tokens. A path always has at least one token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    tokens: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path.
    ///
    /// # Errors
    ///
    /// - [`FieldError::EmptyPath`] for `""`
    /// - [`FieldError::PathTooLong`] when the token count exceeds the limit
    ///
    /// # Example
    ///
    /// ```
    /// use ingest_field_path::FieldPath;
    ///
    /// let path = FieldPath::parse("list.0.name").unwrap();
    /// assert_eq!(path.tokens(), ["list", "0", "name"]);
    /// assert_eq!(path.leaf(), "name");
    /// assert!(FieldPath::parse("").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self, FieldError> {
        if path.is_empty() {
            return Err(FieldError::EmptyPath);
        }
        let parsed = Self {
            raw: path.to_string(),
            tokens: path.split(SEPARATOR).map(str::to_string).collect(),
        };
        validate_path(&parsed)?;
        Ok(parsed)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn depth(&self) -> usize {
        self.tokens.len()
    }

    /// The last token, i.e. the key or index addressed inside the parent.
    pub fn leaf(&self) -> &str {
        // Non-empty by construction.
        &self.tokens[self.tokens.len() - 1]
    }

    /// Tokens leading to the parent container.
    pub fn parent_tokens(&self) -> &[String] {
        &self.tokens[..self.tokens.len() - 1]
    }

    /// Check if `other` addresses a value nested strictly inside this path.
    ///
    /// Comparison is token-wise, so `a` is a prefix of `a.b` but not of `ab`.
    ///
    /// # Example
    ///
    /// ```
    /// use ingest_field_path::FieldPath;
    ///
    /// let parent = FieldPath::parse("foo").unwrap();
    /// let child = FieldPath::parse("foo.bar").unwrap();
    /// assert!(parent.is_prefix_of(&child));
    /// assert!(!child.is_prefix_of(&parent));
    /// assert!(!parent.is_prefix_of(&parent));
    /// ```
    pub fn is_prefix_of(&self, other: &FieldPath) -> bool {
        is_token_prefix(&self.tokens, &other.tokens)
    }
}

/// True when `outer` is a strict token-wise prefix of `inner`.
pub fn is_token_prefix<S: AsRef<str>>(outer: &[S], inner: &[S]) -> bool {
    outer.len() < inner.len()
        && outer
            .iter()
            .zip(inner.iter())
            .all(|(a, b)| a.as_ref() == b.as_ref())
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for FieldPath {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for FieldPath {
    type Error = FieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Parse a sequence index token.
///
/// Returns `None` when the token is not a base-10 integer. Negative numbers
/// parse successfully so callers can report them as out of bounds.
pub fn parse_index(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}

/// Convert a parsed index into a position inside a sequence of length `len`.
///
/// `allow_end` admits `index == len`, the append slot used by writes.
pub fn checked_index(index: i64, len: usize, allow_end: bool) -> Option<usize> {
    let idx = usize::try_from(index).ok()?;
    if idx < len || (allow_end && idx == len) {
        Some(idx)
    } else {
        None
    }
}
