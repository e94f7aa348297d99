//! Configuration types.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_BIND_HOST, DEFAULT_FEATURE_COLUMNS_PATH, DEFAULT_MODEL_PATH, DEFAULT_PORT,
    DEFAULT_TLD_MAPPING_PATH, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use phishing_detector::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     model_path: PathBuf::from("artifacts/model.json"),
///     tld_mapping_path: None,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// HTTP User-Agent header value for page fetches
    pub user_agent: String,

    /// Trained classifier artifact (JSON)
    pub model_path: PathBuf,

    /// Ordered feature columns the classifier expects (JSON array)
    pub feature_columns_path: PathBuf,

    /// TLD frequency mapping (JSON object); a missing file means an empty table
    pub tld_mapping_path: Option<PathBuf>,

    /// Prediction server bind host
    pub host: String,

    /// Prediction server port
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            feature_columns_path: PathBuf::from(DEFAULT_FEATURE_COLUMNS_PATH),
            tld_mapping_path: Some(PathBuf::from(DEFAULT_TLD_MAPPING_PATH)),
            host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
