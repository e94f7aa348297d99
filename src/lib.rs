//! phishing_detector library: URL feature extraction and phishing scoring
//!
//! This library derives a fixed feature record from a URL (lexical features,
//! structural features of the fetched page, and derived statistics),
//! reconciles it with the feature columns a trained classifier expects, and
//! scores it as legitimate or phishing.
//!
//! # Example
//!
//! ```no_run
//! use phishing_detector::{Config, PhishingDetector};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let detector = PhishingDetector::from_config(&config)?;
//!
//! let scored = detector.classify("https://example.com").await?;
//! println!("{} is {}", scored.url, scored.result);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Page fetches are async, so this library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod artifacts;
pub mod assembler;
pub mod classifier;
pub mod config;
mod detector;
pub mod error_handling;
pub mod features;
pub mod fetch;
pub mod initialization;
pub mod server;
mod utils;

// Re-export public API
pub use assembler::{AssembledRow, ExpectedSchema, FeatureAssembler, TldFrequencyTable};
pub use classifier::{Classifier, LogisticModel, Verdict};
pub use config::{Config, LogFormat, LogLevel};
pub use detector::{extract_features, PhishingDetector, ScoringResult};
pub use error_handling::{AssemblyError, ClassifierError, DetectionError};
pub use features::{FeatureRecord, FeatureValue};
pub use fetch::PageFetcher;
