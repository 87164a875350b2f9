use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::gender::Gender;
use crate::age::age_on;

/// The parts of a patient record the engine reads. Owned by the host
/// application; the engine never writes it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub clinical: ClinicalSummary,
}

impl Patient {
    /// Age in whole years on `as_of`, or `None` without a birth date.
    pub fn age_on(&self, as_of: jiff::civil::Date) -> Option<u32> {
        self.birth_date.map(|birth| age_on(birth, as_of))
    }

    /// Recorded sex, or the formula default when unrecorded.
    pub fn formula_gender(&self) -> Gender {
        self.gender.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalSummary {
    pub objective: Option<String>,
    #[serde(default)]
    pub active_diagnoses: Vec<String>,
}
