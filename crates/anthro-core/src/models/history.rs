use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::measurement::MeasurementSet;
use super::protocol::ProtocolId;
use super::result::ComputedResult;

/// One finalized assessment in a patient's longitudinal series.
///
/// `date` is an opaque key: two records are the same entry only when their
/// date strings are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryRecord {
    pub date: String,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub height: Option<f64>,
    pub bmi: f64,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub waist: Option<f64>,
    pub body_fat_pct: f64,
    pub fat_mass_kg: f64,
    pub lean_mass_kg: f64,
    #[serde(default)]
    pub protocol: ProtocolId,
}

impl HistoryRecord {
    pub fn from_result(
        date: impl Into<String>,
        set: &MeasurementSet,
        result: &ComputedResult,
        protocol: ProtocolId,
    ) -> Self {
        Self {
            date: date.into(),
            weight: set.weight,
            height: set.height,
            bmi: result.bmi,
            waist: set.circumferences.waist,
            body_fat_pct: result.body_fat_pct,
            fat_mass_kg: result.fat_mass_kg,
            lean_mass_kg: result.lean_mass_kg,
            protocol,
        }
    }
}
