//! Classifier adapters.
//!
//! The pipeline only needs "row in, 0 or 1 out". [`Classifier`] is that seam;
//! [`Verdict::from_score`] enforces the `{0, 1}` contract on whatever
//! implementation is plugged in.

mod logistic;
mod verdict;

use crate::assembler::AssembledRow;
use crate::error_handling::ClassifierError;

pub use logistic::LogisticModel;
pub use verdict::Verdict;

/// A trained binary classifier.
///
/// Implementations are shared read-only across concurrent requests.
pub trait Classifier: Send + Sync {
    /// Scores one assembled row, returning the raw label.
    ///
    /// The contract is 1 for legitimate and 0 for phishing; the caller
    /// treats anything else as a fatal integration error.
    fn score(&self, row: &AssembledRow) -> Result<i64, ClassifierError>;
}
