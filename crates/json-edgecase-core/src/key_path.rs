//! Dotted key paths.
//!
//! A [`KeyPath`] names a location inside a document by field names only.
//! Arrays are transparent: a path walks through the first element of any
//! array it meets, so indices never appear in a path.
//!
//! Paths render as `a.b.c` and parse back by splitting on `.`. A field name
//! that itself contains `.` therefore cannot be addressed unambiguously.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EdgeCaseError;

/// Separator between segments in the rendered form.
pub const SEPARATOR: char = '.';

/// An ordered sequence of field-name segments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The empty path, which resolves to the document itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from already-split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a user-selected key.
    ///
    /// An empty selection is rejected with [`EdgeCaseError::NoSelection`].
    /// Whitespace is a legal field name and is kept as-is.
    pub fn parse(selected: &str) -> Result<Self, EdgeCaseError> {
        if selected.is_empty() {
            return Err(EdgeCaseError::NoSelection);
        }
        Ok(Self::from_rendered(selected))
    }

    /// Inverse of `Display`: `""` is the root, anything else splits on `.`.
    fn from_rendered(rendered: &str) -> Self {
        if rendered.is_empty() {
            Self::root()
        } else {
            Self::from_segments(rendered.split(SEPARATOR))
        }
    }

    /// Return a new path with `segment` appended.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment.to_string());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the parent segments and the final segment.
    pub fn split_last(&self) -> Option<(&String, &[String])> {
        self.segments.split_last()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for KeyPath {
    type Err = EdgeCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeyPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_rendered(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_dots() {
        let path = KeyPath::parse("user.address.city").unwrap();
        assert_eq!(path.segments(), ["user", "address", "city"]);
        assert_eq!(path.to_string(), "user.address.city");
    }

    #[test]
    fn test_parse_rejects_empty_selection() {
        assert!(matches!(KeyPath::parse(""), Err(EdgeCaseError::NoSelection)));
    }

    #[test]
    fn test_parse_accepts_whitespace_field_name() {
        let path = KeyPath::parse(" ").unwrap();
        assert_eq!(path.segments(), [" "]);
        assert_eq!(KeyPath::parse("a. b").unwrap().segments(), ["a", " b"]);
    }

    #[test]
    fn test_child_leaves_parent_untouched() {
        let parent = KeyPath::from_segments(["a"]);
        let child = parent.child("b");
        assert_eq!(parent.to_string(), "a");
        assert_eq!(child.to_string(), "a.b");
    }

    #[test]
    fn test_root_renders_empty() {
        assert_eq!(KeyPath::root().to_string(), "");
        assert!(KeyPath::root().is_empty());
    }

    #[test]
    fn test_serde_uses_dotted_string() {
        let path = KeyPath::from_segments(["items", "sku"]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"items.sku\"");
        let back: KeyPath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn test_serde_round_trips_root_and_blank_names() {
        for path in [KeyPath::root(), KeyPath::from_segments([" "])] {
            let json = serde_json::to_string(&path).unwrap();
            let back: KeyPath = serde_json::from_str(&json).unwrap();
            assert_eq!(back, path);
        }
    }
}
