//! The assembled, schema-ordered row.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::features::FeatureValue;

/// One row whose columns exactly match the expected schema, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledRow {
    columns: Vec<(String, FeatureValue)>,
}

impl AssembledRow {
    pub(crate) fn new(columns: Vec<(String, FeatureValue)>) -> Self {
        Self { columns }
    }

    /// Column names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Values in schema order.
    pub fn values(&self) -> impl Iterator<Item = &FeatureValue> {
        self.columns.iter().map(|(_, value)| value)
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Value of the column called `name`.
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// Serialized as a JSON object that keeps schema order.
impl Serialize for AssembledRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
