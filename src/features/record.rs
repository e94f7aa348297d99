//! Feature values and the named feature record.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A single feature value.
///
/// Serializes untagged, so a record renders as a flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Boolean flag (e.g. `IsDomainIP`)
    Bool(bool),
    /// Signed count (e.g. `NoOfSubDomain`, which may be negative)
    Int(i64),
    /// Ratio or probability
    Float(f64),
    /// String category (e.g. the raw `TLD`)
    Category(String),
}

impl FeatureValue {
    /// Numeric view of the value. Booleans map to 0/1, categories have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            FeatureValue::Int(i) => Some(*i as f64),
            FeatureValue::Float(f) => Some(*f),
            FeatureValue::Category(_) => None,
        }
    }

    /// String view of a category value.
    pub fn as_category(&self) -> Option<&str> {
        match self {
            FeatureValue::Category(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Bool(b) => write!(f, "{b}"),
            FeatureValue::Int(i) => write!(f, "{i}"),
            FeatureValue::Float(x) => write!(f, "{x}"),
            FeatureValue::Category(s) => f.write_str(s),
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        FeatureValue::Bool(b)
    }
}

impl From<i64> for FeatureValue {
    fn from(i: i64) -> Self {
        FeatureValue::Int(i)
    }
}

impl From<usize> for FeatureValue {
    fn from(n: usize) -> Self {
        FeatureValue::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for FeatureValue {
    fn from(x: f64) -> Self {
        FeatureValue::Float(x)
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        FeatureValue::Category(s)
    }
}

/// Mapping from feature name to value.
///
/// Keys always come from [`crate::features::names`], whose entries are checked
/// for uniqueness at compile time, so merging analyzer output never shadows
/// a distinct feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureRecord {
    values: BTreeMap<&'static str, FeatureValue>,
}

impl FeatureRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a feature, returning the previous value under that name.
    pub fn insert(
        &mut self,
        name: &'static str,
        value: impl Into<FeatureValue>,
    ) -> Option<FeatureValue> {
        self.values.insert(name, value.into())
    }

    /// Removes a feature, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<FeatureValue> {
        self.values.remove(name)
    }

    /// Looks up a feature by name.
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.values.get(name)
    }

    /// Whether the record holds a feature with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Key-union merge of another record into this one.
    pub fn merge(&mut self, other: FeatureRecord) {
        for (name, value) in other.values {
            let previous = self.values.insert(name, value);
            debug_assert!(previous.is_none(), "feature {name} produced twice");
        }
    }

    /// Number of features in the record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates features in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FeatureValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }
}

impl<const N: usize> From<[(&'static str, FeatureValue); N]> for FeatureRecord {
    fn from(entries: [(&'static str, FeatureValue); N]) -> Self {
        let mut record = FeatureRecord::new();
        for (name, value) in entries {
            record.insert(name, value);
        }
        record
    }
}
