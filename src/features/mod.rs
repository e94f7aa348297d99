//! Feature extraction.
//!
//! This module turns a URL (and optionally its fetched markup) into a named
//! feature record:
//! - Lexical features from the URL string (`lexical`)
//! - Page features from HTML markup (`page`)
//! - Derived statistics (`derived`)
//!
//! Each analyzer returns a typed struct that flattens into a [`FeatureRecord`];
//! [`merge_features`] combines the three by key union.

mod derived;
mod lexical;
pub mod names;
mod page;
mod record;

// Re-export public API
pub use derived::{extract_derived_features, DerivedFeatures};
pub use lexical::{extract_url_features, network_location, UrlFeatures};
pub use page::{analyze_document, PageFeatures};
pub use record::{FeatureRecord, FeatureValue};

/// Merges the output of the three analyzers into one record.
pub fn merge_features(
    url_features: UrlFeatures,
    page_features: PageFeatures,
    derived_features: DerivedFeatures,
) -> FeatureRecord {
    let mut record = url_features.into_record();
    record.merge(page_features.into_record());
    record.merge(derived_features.into_record());
    record
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
