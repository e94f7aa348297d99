//! Secondary statistics computed from the URL.

use crate::config::TLD_LEGITIMATE_PROB_PLACEHOLDER;

use super::names;
use super::record::{FeatureRecord, FeatureValue};

/// Derived URL statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedFeatures {
    /// Alphabetic characters divided by total characters.
    ///
    /// Despite the training-time name this is a density ratio, not a
    /// measure of consecutive character runs.
    pub char_continuation_rate: f64,
    /// Constant prior; the TLD frequency table is applied later, during assembly.
    pub tld_legitimate_prob: f64,
}

impl DerivedFeatures {
    /// Flattens into named record entries.
    pub fn into_record(self) -> FeatureRecord {
        FeatureRecord::from([
            (
                names::CHAR_CONTINUATION_RATE,
                FeatureValue::Float(self.char_continuation_rate),
            ),
            (
                names::TLD_LEGITIMATE_PROB,
                FeatureValue::Float(self.tld_legitimate_prob),
            ),
        ])
    }
}

/// Computes derived features for a URL. Never fails.
pub fn extract_derived_features(url: &str) -> DerivedFeatures {
    let total = url.chars().count();
    let char_continuation_rate = if total > 0 {
        url.chars().filter(|c| c.is_alphabetic()).count() as f64 / total as f64
    } else {
        0.0
    };

    DerivedFeatures {
        char_continuation_rate,
        tld_legitimate_prob: TLD_LEGITIMATE_PROB_PLACEHOLDER,
    }
}
