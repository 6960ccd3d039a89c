//! Named field values supplied to the dispatch path.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, btree_map};

/// Mapping of field name to value handed to `create`/`send`.
///
/// May be empty. Whether a supplied field lands on a message's declared
/// surface or in its properties namespace is decided by the kind's
/// [`TypeDescriptor`](crate::registry::domain::TypeDescriptor), not by the
/// caller.
///
/// # Examples
///
/// ```
/// use crossbar::bus::domain::FieldValues;
/// use serde_json::json;
///
/// let fields = FieldValues::new()
///     .with("sha", json!("abc123"))
///     .with("subject", json!("Initial commit"));
/// assert_eq!(fields.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, Value>);

impl FieldValues {
    /// Creates an empty field mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds one field, replacing any previous value under the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Inserts one field in place.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// Returns the value supplied under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns the number of supplied fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no fields were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FieldValues {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
