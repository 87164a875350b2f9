//! Snapshot rendering for the narrative service.
//!
//! The service receives the snapshot twice: as JSON for structured reading
//! and as a labelled text block placed in the prompt. Absent values render
//! as `--`.

use anthro_core::models::site::{CircumferenceSite, SkinfoldSite};

use crate::error::SnapshotError;
use crate::model::{Snapshot, SnapshotSource};

const ABSENT: &str = "--";

/// JSON payload sent alongside the prompt.
pub fn to_payload(snapshot: &Snapshot) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Build an XML-style block for the system prompt.
pub fn to_prompt_block(snapshot: &Snapshot) -> String {
    let source = match snapshot.source {
        SnapshotSource::Persisted => "persisted",
        SnapshotSource::Form => "form",
        SnapshotSource::None => "none",
    };
    let anthro = &snapshot.anthro;
    let comp = &anthro.body_comp;

    let mut block = format!(
        "<anthropometry source=\"{source}\" date=\"{}\">\n",
        anthro.date.as_deref().unwrap_or(ABSENT)
    );

    let gender = snapshot.patient.gender.map(|g| g.label()).unwrap_or(ABSENT);
    let age = snapshot
        .patient
        .age
        .map(|a| format!("{a} anos"))
        .unwrap_or_else(|| ABSENT.to_string());
    block.push_str(&format!("Paciente: {gender}, {age}\n"));
    block.push_str(&format!(
        "Objetivo: {}\n",
        snapshot.clinical.objective.as_deref().unwrap_or(ABSENT)
    ));
    if snapshot.clinical.active_diagnoses.is_empty() {
        block.push_str(&format!("Diagnósticos ativos: {ABSENT}\n"));
    } else {
        block.push_str(&format!(
            "Diagnósticos ativos: {}\n",
            snapshot.clinical.active_diagnoses.join("; ")
        ));
    }

    block.push_str(&format!("Peso: {} kg\n", value(anthro.weight_kg, 1)));
    block.push_str(&format!("Altura: {} m\n", value(anthro.height_m, 2)));
    block.push_str(&format!(
        "IMC: {}{}\n",
        metric(comp.bmi, 1),
        comp.bmi_category
            .map(|c| format!(" ({})", c.label()))
            .unwrap_or_default()
    ));
    block.push_str(&format!(
        "RCQ: {}{}\n",
        metric(comp.whr, 2),
        comp.whr_risk
            .map(|r| format!(" ({})", r.label()))
            .unwrap_or_default()
    ));
    block.push_str(&format!("Protocolo: {}\n", anthro.protocol_name));
    block.push_str(&format!("Soma das dobras: {} mm\n", metric(comp.skinfold_sum_mm, 1)));
    block.push_str(&format!("Gordura corporal: {} %\n", metric(comp.body_fat_pct, 1)));
    block.push_str(&format!("Massa gorda: {} kg\n", metric(comp.fat_mass_kg, 1)));
    block.push_str(&format!("Massa magra: {} kg\n", metric(comp.lean_mass_kg, 1)));

    block.push_str("Circunferências (cm):\n");
    for site in CircumferenceSite::ALL {
        block.push_str(&format!(
            "- {}: {}\n",
            site.label(),
            value(anthro.circumferences_cm.get(site), 1)
        ));
    }

    block.push_str("Dobras cutâneas (mm):\n");
    for site in SkinfoldSite::ALL {
        block.push_str(&format!(
            "- {}: {}\n",
            site.label(),
            value(anthro.skinfolds_mm.get(site), 1)
        ));
    }

    block.push_str("</anthropometry>");
    block
}

/// A raw measurement; absent renders as `--`, zero renders as zero.
fn value(v: Option<f64>, places: usize) -> String {
    v.map(|v| format!("{v:.places$}"))
        .unwrap_or_else(|| ABSENT.to_string())
}

/// A derived metric, where 0 means "not computed".
fn metric(v: f64, places: usize) -> String {
    if v == 0.0 {
        ABSENT.to_string()
    } else {
        format!("{v:.places$}")
    }
}
