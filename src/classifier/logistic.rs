//! Logistic regression classifier loaded from a JSON artifact.

use std::collections::HashMap;

use serde::Deserialize;

use crate::assembler::AssembledRow;
use crate::error_handling::ClassifierError;

use super::Classifier;

fn default_threshold() -> f64 {
    0.5
}

/// Linear model over named features.
///
/// Artifact shape:
///
/// ```json
/// {"intercept": -0.3, "weights": {"URLLength": -0.02, "IsHTTPS": 1.4}, "threshold": 0.5}
/// ```
///
/// Columns without a weight contribute nothing. The positive class (1) is
/// "legitimate", matching the label encoding used in training.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogisticModel {
    /// Bias term.
    pub intercept: f64,
    /// Weight per feature column.
    pub weights: HashMap<String, f64>,
    /// Probability at or above which the label is 1.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl LogisticModel {
    /// Probability of the positive class for `row`.
    ///
    /// # Errors
    ///
    /// `ClassifierError::NonNumericFeature` if a weighted column holds a category.
    pub fn probability(&self, row: &AssembledRow) -> Result<f64, ClassifierError> {
        let mut z = self.intercept;
        for (name, value) in row.iter() {
            let weight = match self.weights.get(name) {
                Some(w) if *w != 0.0 => *w,
                _ => continue,
            };
            let x = value
                .as_f64()
                .ok_or_else(|| ClassifierError::NonNumericFeature(name.to_string()))?;
            z += weight * x;
        }
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

impl Classifier for LogisticModel {
    fn score(&self, row: &AssembledRow) -> Result<i64, ClassifierError> {
        let p = self.probability(row)?;
        log::debug!("Positive class probability {p:.4} (threshold {})", self.threshold);
        Ok(i64::from(p >= self.threshold))
    }
}
