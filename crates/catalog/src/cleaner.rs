//! Row validation: drop records missing required fields
//!
//! Cleaning is a stable filter. It never fails and never reorders; a record is
//! kept iff every required field has a value.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::catalog::Catalog;
use crate::field::Field;
use crate::record::PlanetRecord;

/// Whether a record carries every required field
pub fn is_complete(record: &PlanetRecord, required: &[Field]) -> bool {
    required.iter().all(|&field| record.has(field))
}

/// Records carrying every required field, in their original order
pub fn clean(records: &[PlanetRecord], required: &[Field]) -> Vec<PlanetRecord> {
    records
        .iter()
        .filter(|record| is_complete(record, required))
        .cloned()
        .collect()
}

/// Outcome of a cleaning pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningReport {
    pub input_rows: usize,
    pub retained_rows: usize,
    pub dropped_rows: usize,
    /// How many input rows lacked each required field
    ///
    /// A dropped row missing several fields is counted under each of them.
    pub missing_by_field: BTreeMap<Field, usize>,
}

impl fmt::Display for CleaningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kept {} of {} rows ({} dropped)",
            self.retained_rows, self.input_rows, self.dropped_rows
        )?;
        for (field, count) in &self.missing_by_field {
            if *count > 0 {
                write!(f, "; {} missing {}", count, field)?;
            }
        }
        Ok(())
    }
}

impl Catalog {
    /// A new catalog with only the rows carrying every required field
    ///
    /// A field listed more than once is checked and counted once.
    pub fn clean(&self, required: &[Field]) -> (Catalog, CleaningReport) {
        let required: BTreeSet<Field> = required.iter().copied().collect();
        let mut missing_by_field: BTreeMap<Field, usize> =
            required.iter().map(|&field| (field, 0)).collect();

        let cleaned = self.retain_rows(|record| {
            let mut complete = true;
            for &field in &required {
                if !record.has(field) {
                    *missing_by_field.entry(field).or_default() += 1;
                    complete = false;
                }
            }
            complete
        });

        let report = CleaningReport {
            input_rows: self.len(),
            retained_rows: cleaned.len(),
            dropped_rows: self.len() - cleaned.len(),
            missing_by_field,
        };
        info!(
            input = report.input_rows,
            retained = report.retained_rows,
            dropped = report.dropped_rows,
            "catalog cleaned"
        );

        (cleaned, report)
    }
}
