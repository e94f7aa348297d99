//! Verdict labels.

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::error_handling::ClassifierError;

/// Classification outcome for a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
pub enum Verdict {
    /// Classifier label 1.
    Legitimate,
    /// Classifier label 0.
    Phishing,
}

impl Verdict {
    /// Maps a raw classifier label: 1 is legitimate, 0 is phishing.
    ///
    /// # Errors
    ///
    /// Any other label is `ClassifierError::OutOfContract`.
    pub fn from_score(score: i64) -> Result<Self, ClassifierError> {
        match score {
            1 => Ok(Verdict::Legitimate),
            0 => Ok(Verdict::Phishing),
            other => Err(ClassifierError::OutOfContract(other)),
        }
    }
}

impl TryFrom<i64> for Verdict {
    type Error = ClassifierError;

    fn try_from(score: i64) -> Result<Self, Self::Error> {
        Verdict::from_score(score)
    }
}
