//! Fields - Dynamic Field Bag
//!
//! String-keyed map of arbitrary JSON values for stores that need full
//! dynamism: any key, any value, merged shallowly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Merge;

/// A free-form set of named fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(Map<String, Value>);

impl Fields {
    /// Create an empty field bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set a single field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Read a field; unset fields are `None`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names, in key order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for Fields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl Merge for Fields {
    type Delta = Fields;

    fn merge(&mut self, delta: Fields) {
        // Nested objects are replaced wholesale.
        for (key, value) in delta.0 {
            self.0.insert(key, value);
        }
    }
}
