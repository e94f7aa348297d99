//! Expected schema and TLD frequency table.

use std::collections::HashMap;

/// Ordered feature names the classifier requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedSchema {
    columns: Vec<String>,
}

impl ExpectedSchema {
    /// Wraps an ordered column list.
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether the schema lists `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
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

impl<S: Into<String>> FromIterator<S> for ExpectedSchema {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Relative frequency of each TLD in the training data.
///
/// Read-only after loading; lookups of unknown TLDs yield 0.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TldFrequencyTable {
    frequencies: HashMap<String, f64>,
}

impl TldFrequencyTable {
    /// Wraps a TLD → frequency mapping.
    pub fn new(frequencies: HashMap<String, f64>) -> Self {
        Self { frequencies }
    }

    /// An empty table; every lookup yields 0.0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Frequency of `tld`, or 0.0 when the table does not know it.
    pub fn frequency(&self, tld: &str) -> f64 {
        self.frequencies.get(tld).copied().unwrap_or(0.0)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for TldFrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
