//! Body-composition calculator.
//!
//! [`compute`] is total: it never fails and never panics. Whatever cannot be
//! derived from the inputs is reported as 0, with
//! [`ComputedResult::body_fat_outcome`] saying why body fat is absent.
//! Identical inputs give bit-identical outputs, so hosts may call it on
//! every keystroke.

use anthro_core::models::gender::Gender;
use anthro_core::models::measurement::MeasurementSet;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::result::{BmiCategory, BodyFatOutcome, ComputedResult, WhrRisk};
use tracing::debug;

use crate::Estimate;
use crate::formulas::{round_to, siri};
use crate::registry::protocol;

/// Derive every metric of a [`ComputedResult`] from a measurement set.
pub fn compute(
    set: &MeasurementSet,
    age: u32,
    gender: Gender,
    protocol_id: ProtocolId,
) -> ComputedResult {
    let bmi = ratio(set.weight, set.height.map(|h| h * h))
        .map(|v| round_to(v, 1))
        .unwrap_or(0.0);
    let waist_hip_ratio = ratio(set.circumferences.waist, set.circumferences.hip)
        .map(|v| round_to(v, 2))
        .unwrap_or(0.0);

    let definition = protocol(protocol_id);
    let sum = set
        .skinfolds
        .sum_of(definition.required_sites(gender))
        .filter(|s| *s > 0.0);

    let (body_density, raw_pct, body_fat_outcome) = match sum {
        None => (0.0, 0.0, BodyFatOutcome::MissingInputs),
        Some(_) if definition.requires_age() && age == 0 => {
            (0.0, 0.0, BodyFatOutcome::MissingInputs)
        }
        Some(sum_mm) => match definition.estimate(sum_mm, age, gender) {
            Estimate::NotApplicable => (0.0, 0.0, BodyFatOutcome::NotApplicable),
            Estimate::Density(bd) if bd.is_finite() && bd > 0.0 => {
                let (pct, outcome) = check_percentage(siri(bd));
                (round_to(bd, 4), pct, outcome)
            }
            Estimate::Density(_) => (0.0, 0.0, BodyFatOutcome::OutOfRange),
            Estimate::Percentage(pct) => {
                let (pct, outcome) = check_percentage(pct);
                (0.0, pct, outcome)
            }
        },
    };

    if body_fat_outcome != BodyFatOutcome::Computed {
        debug!(
            protocol = %protocol_id,
            outcome = ?body_fat_outcome,
            "body fat not derived"
        );
    }

    let body_fat_pct = round_to(raw_pct, 1);
    let (fat_mass_kg, lean_mass_kg) = match set.weight {
        Some(weight) if weight > 0.0 && body_fat_pct > 0.0 => {
            let fat = round_to(weight * body_fat_pct / 100.0, 1);
            (fat, round_to(weight - fat, 1))
        }
        _ => (0.0, 0.0),
    };

    ComputedResult {
        bmi,
        waist_hip_ratio,
        body_density,
        body_fat_pct,
        fat_mass_kg,
        lean_mass_kg,
        skinfold_sum_mm: sum.map(|s| round_to(s, 1)).unwrap_or(0.0),
        body_fat_outcome,
        bmi_category: BmiCategory::from_bmi(bmi),
        whr_risk: WhrRisk::from_ratio(waist_hip_ratio, gender),
    }
}

/// `numerator / denominator` when both are present and the quotient is a
/// finite positive number.
fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let value = numerator? / denominator?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Clamp a raw percentage to >= 0, tagging anything that needed it.
fn check_percentage(pct: f64) -> (f64, BodyFatOutcome) {
    if !pct.is_finite() || pct < 0.0 {
        (0.0, BodyFatOutcome::OutOfRange)
    } else {
        (pct, BodyFatOutcome::Computed)
    }
}
