use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::gender::Gender;

/// How the body-fat figures of a [`ComputedResult`] came about.
///
/// Numeric outputs are 0 for every outcome other than `Computed`; the tag
/// lets a caller tell "not enough data yet" apart from "data gave a
/// meaningless number".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BodyFatOutcome {
    Computed,
    #[default]
    MissingInputs,
    /// The protocol records sites but has no density equation.
    NotApplicable,
    /// Density was non-finite or non-positive, or the percentage was
    /// negative before clamping.
    OutOfRange,
}

/// WHO adult BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObesityI,
    ObesityII,
    ObesityIII,
}

impl BmiCategory {
    /// `None` for a zero (not computed) BMI.
    pub fn from_bmi(bmi: f64) -> Option<Self> {
        if !bmi.is_finite() || bmi <= 0.0 {
            return None;
        }
        Some(match bmi {
            b if b < 18.5 => BmiCategory::Underweight,
            b if b < 25.0 => BmiCategory::Normal,
            b if b < 30.0 => BmiCategory::Overweight,
            b if b < 35.0 => BmiCategory::ObesityI,
            b if b < 40.0 => BmiCategory::ObesityII,
            _ => BmiCategory::ObesityIII,
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Baixo peso",
            BmiCategory::Normal => "Eutrofia",
            BmiCategory::Overweight => "Sobrepeso",
            BmiCategory::ObesityI => "Obesidade grau I",
            BmiCategory::ObesityII => "Obesidade grau II",
            BmiCategory::ObesityIII => "Obesidade grau III",
        }
    }
}

/// Cardiometabolic risk read from the waist-to-hip ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WhrRisk {
    Normal,
    Elevated,
}

impl WhrRisk {
    /// Cut-offs: above 0.90 for men, above 0.85 for women.
    pub fn from_ratio(whr: f64, gender: Gender) -> Option<Self> {
        if !whr.is_finite() || whr <= 0.0 {
            return None;
        }
        let cutoff = match gender {
            Gender::Male => 0.90,
            Gender::Female => 0.85,
        };
        Some(if whr > cutoff {
            WhrRisk::Elevated
        } else {
            WhrRisk::Normal
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            WhrRisk::Normal => "Normal",
            WhrRisk::Elevated => "Elevado",
        }
    }
}

/// Metrics derived from a measurement set. Never edited directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComputedResult {
    pub bmi: f64,
    pub waist_hip_ratio: f64,
    /// g/mL; 0 when the protocol has no density step or inputs are missing.
    pub body_density: f64,
    pub body_fat_pct: f64,
    pub fat_mass_kg: f64,
    pub lean_mass_kg: f64,
    /// Sum of the protocol's required skinfolds; 0 when any is missing.
    pub skinfold_sum_mm: f64,
    pub body_fat_outcome: BodyFatOutcome,
    pub bmi_category: Option<BmiCategory>,
    pub whr_risk: Option<WhrRisk>,
}
