//! The JSON case file the CLI operates on.
//!
//! Stands in for the host application's storage: one patient, the last
//! saved measurement set, the form draft, and the history series.

use std::path::Path;

use anthro_core::models::history::HistoryRecord;
use anthro_core::models::measurement::MeasurementSet;
use anthro_core::models::patient::Patient;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    pub patient: Patient,
    #[serde(default)]
    pub persisted: Option<MeasurementSet>,
    #[serde(default)]
    pub draft: Option<MeasurementSet>,
    #[serde(default)]
    pub history: Vec<HistoryRecord>,
    /// Reference date for age and staleness; today when absent.
    #[serde(default)]
    pub as_of: Option<Date>,
}

impl CaseFile {
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read case file {}: {e}", path.display()))?;
        let case: CaseFile = serde_json::from_str(&contents)
            .map_err(|e| eyre::eyre!("invalid case file {}: {e}", path.display()))?;
        Ok(case)
    }

    pub fn as_of(&self) -> Date {
        self.as_of.unwrap_or_else(|| jiff::Zoned::now().date())
    }

    /// Draft when present, otherwise the persisted set.
    pub fn working_set(&self) -> Option<&MeasurementSet> {
        self.draft.as_ref().or(self.persisted.as_ref())
    }

    pub fn age(&self) -> u32 {
        self.patient.age_on(self.as_of()).unwrap_or(0)
    }
}
