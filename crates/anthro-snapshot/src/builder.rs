//! Snapshot construction with draft-over-persisted precedence.

use std::sync::Arc;

use anthro_core::models::measurement::MeasurementSet;
use anthro_core::models::patient::Patient;
use anthro_core::models::protocol::ProtocolId;
use anthro_core::models::result::BodyFatOutcome;
use anthro_protocols::calculator::compute;
use anthro_protocols::registry::protocol;
use jiff::civil::Date;
use tracing::debug;

use crate::model::{
    AnthroView, BodyComp, ClinicalView, PatientView, Snapshot, SnapshotResult, SnapshotSource,
};

/// Inputs to one snapshot build. All borrowed; nothing is retained.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotRequest<'a> {
    pub patient: &'a Patient,
    /// Last saved measurement set, if any.
    pub persisted: Option<&'a MeasurementSet>,
    /// In-progress form data, if any.
    pub draft: Option<&'a MeasurementSet>,
    /// Date the patient's age is computed on.
    pub as_of: Date,
    /// Protocol for sets without a selector.
    pub default_protocol: ProtocolId,
}

/// Build a snapshot, preferring usable draft data over the persisted set.
///
/// A set is usable when it has positive weight and height. When neither
/// source is usable the result has no snapshot, `source: None`, and
/// warnings naming what is missing.
pub fn build_snapshot(request: SnapshotRequest<'_>) -> SnapshotResult {
    let mut warnings = Vec::new();

    let usable_draft = request.draft.filter(|d| d.has_core_measurements());
    let usable_persisted = request.persisted.filter(|p| p.has_core_measurements());

    let (set, source) = match (usable_draft, usable_persisted) {
        (Some(draft), _) => (draft, SnapshotSource::Form),
        (None, Some(persisted)) => {
            if request.draft.is_some() {
                warnings.push(
                    "Avaliação em edição incompleta (peso e altura); usando a última avaliação salva"
                        .to_string(),
                );
            }
            (persisted, SnapshotSource::Persisted)
        }
        (None, None) => {
            warnings.extend(describe_gap("Avaliação em edição", request.draft));
            warnings.extend(describe_gap("Avaliação salva", request.persisted));
            debug!(patient = %request.patient.id, "no usable measurements for snapshot");
            return SnapshotResult {
                snapshot: None,
                source: SnapshotSource::None,
                warnings,
            };
        }
    };

    let age = request.patient.age_on(request.as_of);
    if age.is_none() {
        warnings.push("Data de nascimento ausente; idade não calculada".to_string());
    }

    let gender = request.patient.formula_gender();
    let protocol_id = set.effective_protocol(request.default_protocol);
    let definition = protocol(protocol_id);
    let result = compute(set, age.unwrap_or(0), gender, protocol_id);

    match result.body_fat_outcome {
        BodyFatOutcome::Computed => {}
        BodyFatOutcome::MissingInputs => warnings.push(format!(
            "Percentual de gordura não calculado: dobras incompletas para {}",
            definition.name()
        )),
        BodyFatOutcome::NotApplicable => warnings.push(format!(
            "{} não estima percentual de gordura; apenas a soma das dobras é informada",
            definition.name()
        )),
        BodyFatOutcome::OutOfRange => warnings.push(
            "Percentual de gordura fora da faixa válida; verifique as dobras informadas".to_string(),
        ),
    }

    debug!(
        patient = %request.patient.id,
        source = ?source,
        protocol = %protocol_id,
        "snapshot built"
    );

    let snapshot = Snapshot {
        source,
        patient: PatientView {
            gender: request.patient.gender,
            age,
        },
        clinical: ClinicalView {
            objective: request.patient.clinical.objective.clone(),
            active_diagnoses: request.patient.clinical.active_diagnoses.clone(),
        },
        anthro: AnthroView {
            weight_kg: set.weight,
            height_m: set.height,
            protocol: protocol_id,
            protocol_name: definition.name().to_string(),
            body_comp: BodyComp {
                bmi: result.bmi,
                bmi_category: result.bmi_category,
                whr: result.waist_hip_ratio,
                whr_risk: result.whr_risk,
                body_density: result.body_density,
                body_fat_pct: result.body_fat_pct,
                body_fat_outcome: result.body_fat_outcome,
                fat_mass_kg: result.fat_mass_kg,
                lean_mass_kg: result.lean_mass_kg,
                skinfold_sum_mm: result.skinfold_sum_mm,
            },
            circumferences_cm: set.circumferences.clone(),
            skinfolds_mm: set.skinfolds.clone(),
            date: set.procedure_date.clone(),
        },
    };

    SnapshotResult {
        snapshot: Some(Arc::new(snapshot)),
        source,
        warnings,
    }
}

/// Warnings for a source that could not be used.
fn describe_gap(what: &str, set: Option<&MeasurementSet>) -> Vec<String> {
    let Some(set) = set else {
        return vec![format!("{what} não encontrada")];
    };

    let mut gaps = Vec::new();
    if !matches!(set.weight, Some(w) if w > 0.0) {
        gaps.push(format!("{what} sem peso"));
    }
    if !matches!(set.height, Some(h) if h > 0.0) {
        gaps.push(format!("{what} sem altura"));
    }
    gaps
}
