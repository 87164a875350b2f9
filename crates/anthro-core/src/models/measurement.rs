use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::protocol::ProtocolId;
use super::site::{CircumferenceSite, SkinfoldSite};

/// Body circumferences in centimetres. Absent means not measured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Circumferences {
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub neck: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub chest: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub waist: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub abdomen: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub hip: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub arm: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub thigh: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub calf: Option<f64>,
}

impl Circumferences {
    pub fn get(&self, site: CircumferenceSite) -> Option<f64> {
        match site {
            CircumferenceSite::Neck => self.neck,
            CircumferenceSite::Chest => self.chest,
            CircumferenceSite::Waist => self.waist,
            CircumferenceSite::Abdomen => self.abdomen,
            CircumferenceSite::Hip => self.hip,
            CircumferenceSite::Arm => self.arm,
            CircumferenceSite::Thigh => self.thigh,
            CircumferenceSite::Calf => self.calf,
        }
    }
}

/// Skinfold thicknesses in millimetres. Absent means not measured; an
/// explicit zero is a recorded value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Skinfolds {
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub chest: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub axillary: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub triceps: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub biceps: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub subscapular: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub abdominal: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub suprailiac: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub thigh: Option<f64>,
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub calf: Option<f64>,
}

impl Skinfolds {
    pub fn get(&self, site: SkinfoldSite) -> Option<f64> {
        match site {
            SkinfoldSite::Chest => self.chest,
            SkinfoldSite::Axillary => self.axillary,
            SkinfoldSite::Triceps => self.triceps,
            SkinfoldSite::Biceps => self.biceps,
            SkinfoldSite::Subscapular => self.subscapular,
            SkinfoldSite::Abdominal => self.abdominal,
            SkinfoldSite::Suprailiac => self.suprailiac,
            SkinfoldSite::Thigh => self.thigh,
            SkinfoldSite::Calf => self.calf,
        }
    }

    pub fn set(&mut self, site: SkinfoldSite, value: Option<f64>) {
        let slot = match site {
            SkinfoldSite::Chest => &mut self.chest,
            SkinfoldSite::Axillary => &mut self.axillary,
            SkinfoldSite::Triceps => &mut self.triceps,
            SkinfoldSite::Biceps => &mut self.biceps,
            SkinfoldSite::Subscapular => &mut self.subscapular,
            SkinfoldSite::Abdominal => &mut self.abdominal,
            SkinfoldSite::Suprailiac => &mut self.suprailiac,
            SkinfoldSite::Thigh => &mut self.thigh,
            SkinfoldSite::Calf => &mut self.calf,
        };
        *slot = value.and_then(crate::parse::finite);
    }

    /// Sum of the given sites, or `None` if any of them is absent.
    pub fn sum_of(&self, sites: &[SkinfoldSite]) -> Option<f64> {
        sites.iter().map(|site| self.get(*site)).sum()
    }

    /// Sites from `sites` that have no recorded value, in the given order.
    pub fn missing(&self, sites: &[SkinfoldSite]) -> Vec<SkinfoldSite> {
        sites
            .iter()
            .copied()
            .filter(|site| self.get(*site).is_none())
            .collect()
    }
}

/// One anthropometric assessment as entered on the form or stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasurementSet {
    /// Body mass in kilograms.
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub weight: Option<f64>,
    /// Stature in metres.
    #[serde(default, deserialize_with = "crate::parse::lenient")]
    pub height: Option<f64>,
    #[serde(default)]
    pub circumferences: Circumferences,
    #[serde(default)]
    pub skinfolds: Skinfolds,
    /// Raw protocol selector as stored; see [`ProtocolId::resolve`].
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub procedure_date: Option<String>,
}

impl MeasurementSet {
    /// The protocol this set should be computed and validated under.
    pub fn effective_protocol(&self, fallback: ProtocolId) -> ProtocolId {
        ProtocolId::resolve(self.protocol.as_deref(), fallback)
    }

    /// Weight and height are both present and positive.
    pub fn has_core_measurements(&self) -> bool {
        matches!(self.weight, Some(w) if w > 0.0) && matches!(self.height, Some(h) if h > 0.0)
    }
}
