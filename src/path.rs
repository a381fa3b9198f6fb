//! Layout paths - ordered identifiers locating a node in a component tree.
//!
//! A path is a sequence of segments, each either a string key (a prop name
//! or map entry) or a numeric index (a list element). The stringified form
//! is the JSON array rendering of the segments, e.g. `["a","b"]` or
//! `["items",0]`, and is the key format used by the layout-hash table.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Errors produced when parsing a path from its string key form.
#[derive(Debug, Error)]
pub enum PathError {
    /// The key is not valid JSON at all.
    #[error("invalid path key: {0}")]
    Json(#[from] serde_json::Error),
    /// The key parsed as JSON but is not an array of keys and indices.
    #[error("path key must be a JSON array of strings and non-negative integers")]
    InvalidShape,
}

// =============================================================================
// Path Segment
// =============================================================================

/// One step of a layout path: a string key or a numeric index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A list element position.
    Index(usize),
    /// A prop name or map entry.
    Key(String),
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

// =============================================================================
// Layout Path
// =============================================================================

/// An ordered sequence of segments locating a component in the layout tree.
///
/// The empty path addresses the root component.
///
/// # Example
///
/// ```
/// use facet_tui::path::LayoutPath;
///
/// let path: LayoutPath = ["a", "b"].into_iter().collect();
/// assert_eq!(path.to_key(), r#"["a","b"]"#);
///
/// let parsed: LayoutPath = r#"["a","b"]"#.parse().unwrap();
/// assert_eq!(parsed, path);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutPath(Vec<PathSegment>);

impl LayoutPath {
    /// The empty path (addresses the root component).
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Create a path from segments.
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }

    /// The segments of this path, in order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a segment.
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.0.push(segment.into());
    }

    /// Return a new path extended by one segment.
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// The path with the last segment dropped, or None for the root.
    ///
    /// The change-hash of an entry is maintained by the host as a sum over
    /// the path and its ancestors; `parent()` gives hosts the ancestor walk.
    /// Selection itself never walks ancestors.
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// The stringified form used as the layout-hash table key.
    pub fn to_key(&self) -> String {
        self.to_string()
    }
}

impl From<Vec<PathSegment>> for LayoutPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for LayoutPath {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a LayoutPath {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Stringification
// =============================================================================

impl fmt::Display for LayoutPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            match segment {
                PathSegment::Index(index) => write!(f, "{index}")?,
                PathSegment::Key(key) => write_json_string(f, key)?,
            }
        }
        f.write_char(']')
    }
}

/// Write a JSON string literal with the standard escapes.
fn write_json_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl FromStr for LayoutPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        let array = value.as_array().ok_or(PathError::InvalidShape)?;
        let segments = array
            .iter()
            .map(|item| match item {
                serde_json::Value::String(key) => Ok(PathSegment::Key(key.clone())),
                serde_json::Value::Number(n) => n
                    .as_u64()
                    .map(|index| PathSegment::Index(index as usize))
                    .ok_or(PathError::InvalidShape),
                _ => Err(PathError::InvalidShape),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(segments))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_key_keys_and_indices() {
        let path: LayoutPath = LayoutPath::root().child("items").child(0usize).child("label");
        assert_eq!(path.to_key(), r#"["items",0,"label"]"#);
    }

    #[test]
    fn test_to_key_root() {
        assert_eq!(LayoutPath::root().to_key(), "[]");
    }

    #[test]
    fn test_to_key_escapes() {
        let path: LayoutPath = ["with \"quotes\"", "back\\slash", "tab\there"]
            .into_iter()
            .collect();
        assert_eq!(
            path.to_key(),
            r#"["with \"quotes\"","back\\slash","tab\there"]"#
        );
    }

    #[test]
    fn test_parse_round_trip() {
        let original: LayoutPath = LayoutPath::root()
            .child("a")
            .child(3usize)
            .child("with \"quotes\"");
        let parsed: LayoutPath = original.to_key().parse().unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            r#"{"a":1}"#.parse::<LayoutPath>(),
            Err(PathError::InvalidShape)
        ));
        assert!(matches!(
            "\"a\"".parse::<LayoutPath>(),
            Err(PathError::InvalidShape)
        ));
    }

    #[test]
    fn test_parse_rejects_bad_segments() {
        assert!(matches!(
            "[true]".parse::<LayoutPath>(),
            Err(PathError::InvalidShape)
        ));
        assert!(matches!(
            "[-1]".parse::<LayoutPath>(),
            Err(PathError::InvalidShape)
        ));
        assert!(matches!(
            "[1.5]".parse::<LayoutPath>(),
            Err(PathError::InvalidShape)
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(
            "not json".parse::<LayoutPath>(),
            Err(PathError::Json(_))
        ));
    }

    #[test]
    fn test_parent() {
        let path: LayoutPath = ["a", "b"].into_iter().collect();
        let parent = path.parent().unwrap();
        assert_eq!(parent.to_key(), r#"["a"]"#);
        assert_eq!(parent.parent().unwrap(), LayoutPath::root());
        assert!(LayoutPath::root().parent().is_none());
    }

    #[test]
    fn test_serde_matches_display() {
        let path: LayoutPath = LayoutPath::root().child("a").child(7usize);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, path.to_key());
        let back: LayoutPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
