use anthro_core::models::gender::Gender;
use anthro_core::models::measurement::MeasurementSet;
use anthro_core::models::patient::{ClinicalSummary, Patient};
use anthro_core::models::protocol::ProtocolId;
use anthro_snapshot::builder::{SnapshotRequest, build_snapshot};
use anthro_snapshot::prompt::{to_payload, to_prompt_block};
use jiff::civil::date;
use uuid::Uuid;

fn snapshot_block(clinical: ClinicalSummary) -> String {
    let patient = Patient {
        id: Uuid::new_v4(),
        name: "Paciente".to_string(),
        birth_date: Some(date(1980, 1, 1)),
        gender: Some(Gender::Female),
        clinical,
    };
    let mut draft = MeasurementSet {
        weight: Some(64.0),
        height: Some(1.60),
        ..Default::default()
    };
    draft.circumferences.waist = Some(72.0);

    let result = build_snapshot(SnapshotRequest {
        patient: &patient,
        persisted: None,
        draft: Some(&draft),
        as_of: date(2024, 1, 1),
        default_protocol: ProtocolId::default(),
    });
    to_prompt_block(&result.require().unwrap())
}

#[test]
fn block_is_wrapped_and_labelled() {
    let block = snapshot_block(ClinicalSummary::default());
    assert!(block.starts_with("<anthropometry source=\"form\" date=\"--\">"));
    assert!(block.ends_with("</anthropometry>"));
    assert!(block.contains("Paciente: Feminino, 44 anos"));
    assert!(block.contains("IMC: 25.0 (Sobrepeso)"));
}

#[test]
fn absent_values_render_as_dashes() {
    let block = snapshot_block(ClinicalSummary::default());
    assert!(block.contains("- Cintura: 72.0"));
    assert!(block.contains("- Quadril: --"));
    assert!(block.contains("- Tríceps: --"));
    assert!(block.contains("Gordura corporal: -- %"));
    assert!(block.contains("Objetivo: --"));
    assert!(block.contains("Diagnósticos ativos: --"));
}

#[test]
fn diagnoses_are_listed() {
    let block = snapshot_block(ClinicalSummary {
        objective: Some("Hipertrofia".to_string()),
        active_diagnoses: vec!["Hipotireoidismo".to_string(), "Anemia".to_string()],
    });
    assert!(block.contains("Objetivo: Hipertrofia"));
    assert!(block.contains("Diagnósticos ativos: Hipotireoidismo; Anemia"));
}

#[test]
fn payload_is_json() {
    let patient = Patient {
        id: Uuid::new_v4(),
        name: "Paciente".to_string(),
        birth_date: None,
        gender: None,
        clinical: ClinicalSummary::default(),
    };
    let draft = MeasurementSet {
        weight: Some(70.0),
        height: Some(1.70),
        ..Default::default()
    };
    let result = build_snapshot(SnapshotRequest {
        patient: &patient,
        persisted: None,
        draft: Some(&draft),
        as_of: date(2024, 1, 1),
        default_protocol: ProtocolId::default(),
    });

    let payload = to_payload(&result.require().unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(value["source"], "form");
    assert!(value["patient"]["age"].is_null());
}
