//! Error type definitions.
//!
//! This module defines all error and statistics types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error loading a startup artifact (model, feature columns).
    #[error("Artifact loading error: {0}")]
    ArtifactError(#[from] ArtifactError),
}

/// Error types for loading startup artifacts.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// The artifact file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Artifact path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The artifact file is not valid JSON of the expected shape.
    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        /// Artifact path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The feature column list is empty.
    #[error("Feature column list in {} is empty", .0.display())]
    EmptySchema(PathBuf),

    /// The feature column list names a column twice.
    #[error("Feature column '{column}' is listed more than once in {}", path.display())]
    DuplicateColumn {
        /// Artifact path
        path: PathBuf,
        /// Repeated column name
        column: String,
    },
}

/// Failure to reconcile a feature record with the expected schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// The classifier requires a feature no analyzer produced.
    #[error("Missing expected feature: '{0}'")]
    MissingExpectedFeature(String),
}

/// Violations of the classifier integration contract.
///
/// These are fatal: a classifier that answers outside `{0, 1}` or cannot
/// read its input is misconfigured, and its output must not be guessed at.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// The classifier returned a label other than 0 or 1.
    #[error("Classifier returned {0}, expected 0 or 1")]
    OutOfContract(i64),

    /// A weighted column holds a string category instead of a number.
    #[error("Feature '{0}' is not numeric")]
    NonNumericFeature(String),
}

/// Errors surfaced by the scoring pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectionError {
    /// The assembled row could not satisfy the expected schema.
    #[error(transparent)]
    MissingFeature(#[from] AssemblyError),

    /// The classifier broke its contract.
    #[error("Classifier integration error: {0}")]
    Classifier(#[from] ClassifierError),
}

impl DetectionError {
    /// Whether the error indicates a broken integration rather than a
    /// per-request schema problem.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DetectionError::Classifier(_))
    }
}

/// Reasons a page fetch fell back to the empty page.
///
/// Never surfaced to callers; used for logging and statistics only.
#[derive(Error, Debug)]
pub enum PageFetchError {
    /// The URL cannot be requested at all.
    #[error("URL is not fetchable: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request or body read failed.
    #[error("{kind}: {source}")]
    Request {
        /// Failure category
        kind: FetchFailureType,
        /// Underlying reqwest error
        source: ReqwestError,
    },
}

impl PageFetchError {
    /// Failure category for statistics.
    pub fn kind(&self) -> FetchFailureType {
        match self {
            PageFetchError::InvalidUrl(_) => FetchFailureType::InvalidUrl,
            PageFetchError::Request { kind, .. } => *kind,
        }
    }
}

impl From<ReqwestError> for PageFetchError {
    fn from(source: ReqwestError) -> Self {
        PageFetchError::Request {
            kind: super::categorization::categorize_reqwest_error(&source),
            source,
        }
    }
}

/// Categories of page fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchFailureType {
    /// URL could not be parsed for fetching.
    InvalidUrl,
    /// Request could not be built.
    BuilderError,
    /// Redirect loop or limit.
    RedirectError,
    /// Fetch exceeded the timeout.
    TimeoutError,
    /// Connection could not be established.
    ConnectError,
    /// Request failed while being sent.
    RequestError,
    /// Response body could not be read.
    BodyError,
    /// Response body could not be decoded.
    DecodeError,
    /// Anything reqwest does not categorize.
    OtherError,
}

impl std::fmt::Display for FetchFailureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchFailureType {
    /// Human-readable category label.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchFailureType::InvalidUrl => "Invalid URL",
            FetchFailureType::BuilderError => "HTTP request builder error",
            FetchFailureType::RedirectError => "HTTP request redirect error",
            FetchFailureType::TimeoutError => "HTTP request timeout error",
            FetchFailureType::ConnectError => "HTTP request connect error",
            FetchFailureType::RequestError => "HTTP request error",
            FetchFailureType::BodyError => "HTTP request body error",
            FetchFailureType::DecodeError => "HTTP request decode error",
            FetchFailureType::OtherError => "HTTP request other error",
        }
    }
}

/// Outcomes of a scoring request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum OutcomeType {
    /// Scored as legitimate.
    Legitimate,
    /// Scored as phishing.
    Phishing,
    /// Assembly failed on a missing feature.
    MissingFeature,
    /// Classifier failed or broke its label contract.
    ClassifierError,
}

impl OutcomeType {
    /// Stable snake_case label used in stats output.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeType::Legitimate => "legitimate",
            OutcomeType::Phishing => "phishing",
            OutcomeType::MissingFeature => "missing_feature",
            OutcomeType::ClassifierError => "classifier_error",
        }
    }
}
