// Shared test helpers for building detectors around mock collaborators.
//
// Included by the integration test files with `mod helpers;`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use phishing_detector::error_handling::ProcessingStats;
use phishing_detector::{
    AssembledRow, Classifier, ClassifierError, ExpectedSchema, FeatureAssembler, PageFetcher,
    PhishingDetector, TldFrequencyTable,
};

/// Classifier double that always answers with the same label and counts calls.
#[allow(dead_code)]
pub struct FixedClassifier {
    pub label: i64,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl FixedClassifier {
    pub fn new(label: i64) -> Arc<Self> {
        Arc::new(Self {
            label,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for FixedClassifier {
    fn score(&self, _row: &AssembledRow) -> Result<i64, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.label)
    }
}

/// Feature columns of the deployed model.
#[allow(dead_code)]
pub const MODEL_COLUMNS: &[&str] = &[
    "URLLength",
    "DomainLength",
    "IsDomainIP",
    "TLD_Frequency",
    "NoOfSubDomain",
    "IsHTTPS",
    "NoOfDigits",
    "NoOfSpecialChars",
    "NoOfHyphens",
    "HasTitle",
    "HasFavicon",
    "HasForm",
    "HasJavaScript",
    "HasIframe",
    "HasMetaRedirect",
    "HasExternalLinks",
    "CharContinuationRate",
    "TLDLegitimateProb",
];

/// Builds a detector with a short-timeout client and the given collaborators.
#[allow(dead_code)]
pub fn build_detector(
    columns: &[&str],
    tld_table: TldFrequencyTable,
    classifier: Arc<dyn Classifier>,
) -> PhishingDetector {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test client");
    let stats = Arc::new(ProcessingStats::new());
    let fetcher = PageFetcher::new(Arc::new(client), Arc::clone(&stats));
    let schema: ExpectedSchema = columns.iter().copied().collect();
    let assembler = FeatureAssembler::new(Arc::new(schema), Arc::new(tld_table));
    PhishingDetector::new(fetcher, assembler, classifier, stats)
}
