//! Feature assembly.
//!
//! Reconciles a merged feature record with the classifier's expected schema:
//! - injects `TLD_Frequency` (and drops the raw `TLD`) when the schema asks for it
//! - projects the record onto the schema's ordered columns
//!
//! The schema and TLD table are loaded once and shared read-only.

mod row;
mod schema;

use std::sync::Arc;

use log::debug;

use crate::config::UNKNOWN_TLD;
use crate::error_handling::AssemblyError;
use crate::features::{names, FeatureRecord, FeatureValue};

pub use row::AssembledRow;
pub use schema::{ExpectedSchema, TldFrequencyTable};

/// Builds classifier rows from feature records.
#[derive(Debug, Clone)]
pub struct FeatureAssembler {
    schema: Arc<ExpectedSchema>,
    tld_table: Arc<TldFrequencyTable>,
}

impl FeatureAssembler {
    /// Creates an assembler over a shared schema and TLD table.
    pub fn new(schema: Arc<ExpectedSchema>, tld_table: Arc<TldFrequencyTable>) -> Self {
        Self { schema, tld_table }
    }

    /// The schema rows are projected onto.
    pub fn schema(&self) -> &ExpectedSchema {
        &self.schema
    }

    /// Reconciles `record` with the schema and returns the ordered row.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::MissingExpectedFeature` naming the first schema
    /// column the record cannot supply.
    pub fn assemble(&self, mut record: FeatureRecord) -> Result<AssembledRow, AssemblyError> {
        if self.schema.contains(names::TLD_FREQUENCY) {
            self.encode_tld(&mut record);
        }

        let columns = self
            .schema
            .columns()
            .iter()
            .map(|column| match record.get(column) {
                Some(value) => Ok((column.clone(), value.clone())),
                None => Err(AssemblyError::MissingExpectedFeature(column.clone())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AssembledRow::new(columns))
    }

    /// Replaces the raw TLD category with its frequency encoding.
    fn encode_tld(&self, record: &mut FeatureRecord) {
        let tld = match record.remove(names::TLD) {
            Some(FeatureValue::Category(tld)) => tld,
            _ => UNKNOWN_TLD.to_string(),
        };
        let frequency = self.tld_table.frequency(&tld);
        debug!("TLD {tld:?} encoded as frequency {frequency}");
        record.insert(names::TLD_FREQUENCY, frequency);
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
