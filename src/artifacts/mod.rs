//! Startup artifact loading.
//!
//! Loads, once per process:
//! - the trained classifier (`model.json`)
//! - the ordered feature columns it expects (`feature_columns.json`)
//! - the optional TLD frequency mapping (`tld_mapping.json`)
//!
//! The model and columns are required. The TLD mapping is best effort: any
//! problem loading it degrades to an empty table.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::assembler::{ExpectedSchema, TldFrequencyTable};
use crate::classifier::LogisticModel;
use crate::config::Config;
use crate::error_handling::ArtifactError;

/// Everything loaded from disk at startup.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    /// Trained classifier.
    pub model: LogisticModel,
    /// Ordered feature columns the model was trained on.
    pub schema: ExpectedSchema,
    /// TLD frequencies; empty when the mapping could not be loaded.
    pub tld_table: TldFrequencyTable,
}

impl ModelArtifacts {
    /// Loads all artifacts named in `config`.
    ///
    /// # Errors
    ///
    /// Returns an `ArtifactError` if the model or the feature columns cannot
    /// be loaded. TLD mapping problems are only logged.
    pub fn load(config: &Config) -> Result<Self, ArtifactError> {
        let model = load_model(&config.model_path)?;
        let schema = load_expected_schema(&config.feature_columns_path)?;
        let tld_table = load_tld_frequency_table(config.tld_mapping_path.as_deref());
        info!(
            "Loaded model ({} weights), {} feature columns, {} TLD frequencies",
            model.weights.len(),
            schema.len(),
            tld_table.len()
        );
        Ok(Self {
            model,
            schema,
            tld_table,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the classifier artifact.
pub fn load_model(path: &Path) -> Result<LogisticModel, ArtifactError> {
    read_json(path)
}

/// Loads the ordered feature columns (a JSON array of strings).
///
/// # Errors
///
/// Besides I/O and JSON errors, rejects an empty list and repeated columns.
pub fn load_expected_schema(path: &Path) -> Result<ExpectedSchema, ArtifactError> {
    let columns: Vec<String> = read_json(path)?;
    if columns.is_empty() {
        return Err(ArtifactError::EmptySchema(path.to_path_buf()));
    }

    let mut seen = HashSet::new();
    if let Some(column) = columns.iter().find(|c| !seen.insert(c.as_str())) {
        return Err(ArtifactError::DuplicateColumn {
            path: path.to_path_buf(),
            column: column.clone(),
        });
    }

    Ok(ExpectedSchema::new(columns))
}

/// Loads the TLD frequency mapping (a JSON object of TLD → number).
///
/// Never fails: no path, an unreadable file or malformed JSON all give an
/// empty table, in which case every TLD encodes as 0.0.
pub fn load_tld_frequency_table(path: Option<&Path>) -> TldFrequencyTable {
    let Some(path) = path else {
        info!("No TLD mapping configured, TLD frequencies default to 0.0");
        return TldFrequencyTable::empty();
    };

    let frequencies: HashMap<String, f64> = match read_json(path) {
        Ok(frequencies) => frequencies,
        Err(e) => {
            warn!("TLD mapping unavailable, TLD frequencies default to 0.0: {e}");
            return TldFrequencyTable::empty();
        }
    };

    let out_of_range = frequencies
        .values()
        .filter(|f| !(0.0..=1.0).contains(*f))
        .count();
    if out_of_range > 0 {
        warn!(
            "{out_of_range} TLD frequencies in {} fall outside [0, 1]",
            path.display()
        );
    }

    TldFrequencyTable::new(frequencies)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
