//! Tag-set normalization.
//!
//! Skills and interests arrive as loosely typed lists: they may be missing,
//! `null`, contain duplicates, or carry non-string junk from older clients.
//! [`TagSet::from_values`] is the single place where that input becomes a
//! proper set. Deserializing a [`TagSet`] goes through the same function, so a
//! profile that made it past serde never needs to be normalized again.
//!
//! Tags are case-sensitive and are kept verbatim; only entries that cannot be
//! used as a tag at all (non-strings, empty or whitespace-only strings) are
//! dropped.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

/// Deduplicated, ordered set of case-sensitive tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TagSet {
    tags: BTreeSet<String>,
}

impl TagSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize an arbitrary JSON list into a tag set.
    ///
    /// Non-string entries and blank strings are skipped; repeated tags
    /// collapse into one.
    pub fn from_values(values: &[Value]) -> Self {
        let mut tags = BTreeSet::new();
        let mut dropped = 0usize;
        for value in values {
            match value {
                Value::String(tag) if is_usable(tag) => {
                    tags.insert(tag.clone());
                }
                _ => dropped += 1,
            }
        }
        if dropped > 0 {
            debug!(dropped, kept = tags.len(), "tag_entries_dropped");
        }
        Self { tags }
    }

    /// Build a set from string slices, applying the same rules as
    /// [`TagSet::from_values`].
    pub fn from_strs<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|t| t.as_ref().to_string())
                .filter(|t| is_usable(t))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.tags.iter()
    }

    /// Number of tags present in both sets.
    pub fn intersection_count(&self, other: &TagSet) -> usize {
        // Walk the smaller set and look up each tag in the larger one.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.tags.iter().filter(|t| large.tags.contains(*t)).count()
    }

    /// Whether the two sets share at least one tag.
    pub fn intersects(&self, other: &TagSet) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.tags.iter().any(|t| large.tags.contains(t))
    }
}

fn is_usable(tag: &str) -> bool {
    !tag.trim().is_empty()
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TagSet::from_strs(iter)
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        write!(f, "[{}]", joined.join(", "))
    }
}

impl Serialize for TagSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.tags.iter())
    }
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(TagSet::new()),
            Value::Array(values) => Ok(TagSet::from_values(&values)),
            other => Err(DeError::custom(format!(
                "expected a list of tags, found {}",
                value_kind(&other)
            ))),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
