//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, artifacts, assembly and scoring
//! - Page fetch failure categorization
//! - Processing statistics tracking (fetch failures, scoring outcomes)
//!
//! Page fetch failures never reach callers: they are categorized, counted,
//! and replaced by the empty page. Assembly and classifier errors are surfaced.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::{log_statistics, ProcessingStats};
pub use types::{
    ArtifactError, AssemblyError, ClassifierError, DetectionError, FetchFailureType,
    InitializationError, OutcomeType, PageFetchError,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for kind in FetchFailureType::iter() {
            assert_eq!(stats.get_fetch_failure_count(kind), 0);
        }
        for outcome in OutcomeType::iter() {
            assert_eq!(stats.get_outcome_count(outcome), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_fetch_failure(FetchFailureType::TimeoutError);
        stats.increment_fetch_failure(FetchFailureType::TimeoutError);
        stats.increment_fetch_failure(FetchFailureType::ConnectError);
        stats.increment_outcome(OutcomeType::Phishing);

        assert_eq!(stats.get_fetch_failure_count(FetchFailureType::TimeoutError), 2);
        assert_eq!(stats.total_fetch_failures(), 3);
        assert_eq!(stats.total_requests(), 1);
        assert_eq!(stats.fetch_failure_summary().len(), 2);
    }

    #[test]
    fn test_missing_feature_message_names_key() {
        let err = AssemblyError::MissingExpectedFeature("NoOfImages".to_string());
        assert_eq!(err.to_string(), "Missing expected feature: 'NoOfImages'");

        let detection = DetectionError::from(err);
        assert!(!detection.is_fatal());
        assert_eq!(
            detection.to_string(),
            "Missing expected feature: 'NoOfImages'"
        );
    }

    #[test]
    fn test_classifier_errors_are_fatal() {
        let err = DetectionError::from(ClassifierError::OutOfContract(2));
        assert!(err.is_fatal());
        assert!(err.to_string().contains("returned 2"));
    }

    #[test]
    fn test_invalid_url_fetch_error_kind() {
        let parse_error = url::Url::parse("not a url").unwrap_err();
        let err = PageFetchError::from(parse_error);
        assert_eq!(err.kind(), FetchFailureType::InvalidUrl);
    }
}
