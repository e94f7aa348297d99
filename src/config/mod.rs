//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, feature constants, default paths)
//! - Configuration types (log level/format, library `Config`)

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
