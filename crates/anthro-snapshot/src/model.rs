use std::sync::Arc;

use anthro_core::models::gender::Gender;
use anthro_core::models::measurement::{Circumferences, Skinfolds};
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::result::{BmiCategory, BodyFatOutcome, WhrRisk};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::SnapshotError;

/// Where the measurements of a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SnapshotSource {
    /// The last saved assessment.
    Persisted,
    /// Unsaved edits from the assessment form.
    Form,
    /// Neither source had weight and height.
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Snapshot {
    pub source: SnapshotSource,
    pub patient: PatientView,
    pub clinical: ClinicalView,
    pub anthro: AnthroView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientView {
    pub gender: Option<Gender>,
    /// Whole years; `None` without a birth date.
    pub age: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClinicalView {
    pub objective: Option<String>,
    pub active_diagnoses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnthroView {
    pub weight_kg: Option<f64>,
    pub height_m: Option<f64>,
    pub protocol: ProtocolId,
    pub protocol_name: String,
    pub body_comp: BodyComp,
    /// Raw values; absent stays `null`.
    pub circumferences_cm: Circumferences,
    pub skinfolds_mm: Skinfolds,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BodyComp {
    pub bmi: f64,
    pub bmi_category: Option<BmiCategory>,
    pub whr: f64,
    pub whr_risk: Option<WhrRisk>,
    pub body_density: f64,
    pub body_fat_pct: f64,
    pub body_fat_outcome: BodyFatOutcome,
    pub fat_mass_kg: f64,
    pub lean_mass_kg: f64,
    pub skinfold_sum_mm: f64,
}

/// Outcome of a snapshot request.
///
/// `snapshot` is `None` exactly when `source` is [`SnapshotSource::None`];
/// callers must not start narrative or report generation in that case.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SnapshotResult {
    pub snapshot: Option<Arc<Snapshot>>,
    pub source: SnapshotSource,
    pub warnings: Vec<String>,
}

impl SnapshotResult {
    /// The snapshot, or an error carrying the warnings.
    pub fn require(&self) -> Result<Arc<Snapshot>, SnapshotError> {
        self.snapshot
            .clone()
            .ok_or_else(|| SnapshotError::Unavailable(self.warnings.join("; ")))
    }
}
