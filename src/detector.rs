//! Scoring pipeline.
//!
//! [`PhishingDetector`] runs one URL through lexical analysis, the page fetch,
//! derived statistics, assembly and the classifier, strictly in that order
//! and on the caller's task. Its collaborators are injected once and shared
//! read-only between requests.

use std::sync::Arc;

use log::{debug, error, info};
use serde::Serialize;

use crate::artifacts::ModelArtifacts;
use crate::assembler::{AssembledRow, FeatureAssembler};
use crate::classifier::{Classifier, Verdict};
use crate::config::Config;
use crate::error_handling::{
    AssemblyError, DetectionError, InitializationError, OutcomeType, ProcessingStats,
};
use crate::features::{extract_derived_features, extract_url_features, merge_features, FeatureRecord};
use crate::fetch::PageFetcher;
use crate::initialization::init_client;

/// Result of scoring one URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    /// The URL exactly as submitted
    pub url: String,
    /// `"Legitimate"` or `"Phishing"`
    pub result: Verdict,
}

/// Feature extraction and scoring for single URLs.
#[derive(Clone)]
pub struct PhishingDetector {
    fetcher: PageFetcher,
    assembler: FeatureAssembler,
    classifier: Arc<dyn Classifier>,
    stats: Arc<ProcessingStats>,
}

impl PhishingDetector {
    /// Assembles a detector from already-initialized collaborators.
    pub fn new(
        fetcher: PageFetcher,
        assembler: FeatureAssembler,
        classifier: Arc<dyn Classifier>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            fetcher,
            assembler,
            classifier,
            stats,
        }
    }

    /// Loads artifacts and builds the HTTP client described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the model or feature columns
    /// cannot be loaded, or the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let artifacts = ModelArtifacts::load(config)?;
        let stats = Arc::new(ProcessingStats::new());
        let fetcher = PageFetcher::new(init_client(config)?, Arc::clone(&stats));
        let assembler = FeatureAssembler::new(
            Arc::new(artifacts.schema),
            Arc::new(artifacts.tld_table),
        );
        Ok(Self::new(
            fetcher,
            assembler,
            Arc::new(artifacts.model),
            stats,
        ))
    }

    /// Statistics collected by this detector (shared by clones).
    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Extracts the merged, unreconciled feature record for `url`.
    ///
    /// Never fails; page fetch problems yield zeroed page features.
    pub async fn extract_features(&self, url: &str) -> FeatureRecord {
        extract_features(&self.fetcher, url).await
    }

    /// Extracts features and reconciles them with the expected schema.
    ///
    /// # Errors
    ///
    /// `AssemblyError::MissingExpectedFeature` when the schema needs a
    /// feature no analyzer produces.
    pub async fn assemble(&self, url: &str) -> Result<AssembledRow, AssemblyError> {
        let record = self.extract_features(url).await;
        self.assembler.assemble(record)
    }

    /// Scores `url`.
    ///
    /// The caller must reject empty URLs before calling this.
    ///
    /// # Errors
    ///
    /// - `DetectionError::MissingFeature` for schema mismatches
    /// - `DetectionError::Classifier` for classifier contract violations (fatal)
    pub async fn classify(&self, url: &str) -> Result<ScoringResult, DetectionError> {
        let outcome = self.score(url).await;
        match &outcome {
            Ok(scored) => {
                info!("{url} classified as {}", scored.result);
                self.stats.increment_outcome(match scored.result {
                    Verdict::Legitimate => OutcomeType::Legitimate,
                    Verdict::Phishing => OutcomeType::Phishing,
                });
            }
            Err(e @ DetectionError::MissingFeature(_)) => {
                error!("Cannot score {url}: {e}");
                self.stats.increment_outcome(OutcomeType::MissingFeature);
            }
            Err(e @ DetectionError::Classifier(_)) => {
                error!("Classifier contract violated while scoring {url}: {e}");
                self.stats.increment_outcome(OutcomeType::ClassifierError);
            }
        }
        outcome
    }

    async fn score(&self, url: &str) -> Result<ScoringResult, DetectionError> {
        let row = self.assemble(url).await?;
        let label = self.classifier.score(&row)?;
        let result = Verdict::from_score(label)?;
        Ok(ScoringResult {
            url: url.to_string(),
            result,
        })
    }
}

/// Runs the three analyzers for `url` and merges their output.
///
/// Needs no model artifacts; page fetch problems yield zeroed page features.
pub async fn extract_features(fetcher: &PageFetcher, url: &str) -> FeatureRecord {
    let url_features = extract_url_features(url);
    debug!("Lexical features for {url}: {url_features:?}");

    let page_features = fetcher.fetch_page_features(url).await;
    debug!("Page features for {url}: {page_features:?}");

    let derived_features = extract_derived_features(url);
    debug!("Derived features for {url}: {derived_features:?}");

    merge_features(url_features, page_features, derived_features)
}
