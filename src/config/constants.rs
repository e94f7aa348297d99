//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the page fetch timeout and fixed feature parameters.

use std::time::Duration;

/// Page fetch timeout.
///
/// Covers the whole request (connect, TLS, headers and body). The feature
/// pipeline never waits longer than this for a page.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Default User-Agent string for page fetches.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("phishing_detector/", env!("CARGO_PKG_VERSION"));

/// Characters counted by the `NoOfSpecialChars` feature.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[]{};:'\"<>,.?/";

/// Constant emitted as `TLDLegitimateProb`.
///
/// The model was trained with this placeholder, so it is not derived from
/// the TLD frequency table.
pub const TLD_LEGITIMATE_PROB_PLACEHOLDER: f64 = 0.01;

/// TLD used when the network location contains no dot.
pub const UNKNOWN_TLD: &str = "unknown";

/// Default trained model location.
pub const DEFAULT_MODEL_PATH: &str = "./model.json";
/// Default ordered feature column list location.
pub const DEFAULT_FEATURE_COLUMNS_PATH: &str = "./feature_columns.json";
/// Default TLD frequency mapping location.
pub const DEFAULT_TLD_MAPPING_PATH: &str = "./tld_mapping.json";

/// Default prediction server bind address.
pub const DEFAULT_BIND_HOST: &str = "127.0.0.1";
/// Default prediction server port.
pub const DEFAULT_PORT: u16 = 5000;
