use anthro_cli::case::CaseFile;
use anthro_cli::cli::SnapshotFormat;
use anthro_cli::commands::{compute_case, save_case, snapshot_case, stale_case, validate_case};
use anthro_cli::config::EngineConfig;
use serde_json::{Value, json};

fn case(draft: Value) -> CaseFile {
    serde_json::from_value(json!({
        "patient": {
            "id": "7f1c0a52-3f5e-4a55-9a3d-0d6b2c1e9f10",
            "name": "Paciente",
            "birth_date": "1990-06-15",
            "gender": "Feminino",
            "clinical": { "objective": "Recomposição corporal", "active_diagnoses": [] }
        },
        "draft": draft,
        "history": [
            { "date": "2024-01-01", "weight": 66, "height": 1.65, "bmi": 24.2,
              "waist": 74, "body_fat_pct": 27.1, "fat_mass_kg": 17.9, "lean_mass_kg": 48.1 }
        ],
        "as_of": "2024-03-05"
    }))
    .unwrap()
}

fn full_draft() -> Value {
    json!({
        "weight": "64,5",
        "height": "1.65",
        "protocol": "jackson_pollock_3",
        "procedure_date": "2024-03-05",
        "circumferences": { "waist": 72, "hip": 98 },
        "skinfolds": { "triceps": 18, "suprailiac": 15, "thigh": 25 }
    })
}

#[test]
fn compute_reads_the_draft() {
    let output = compute_case(&case(full_draft()), &EngineConfig::default()).unwrap();
    let result: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(result["bmi"], 23.7);
    assert_eq!(result["body_fat_outcome"], "computed");
}

#[test]
fn validate_lists_missing_labels() {
    let draft = json!({ "weight": 64, "height": 1.65, "protocol": "jackson_pollock_3",
                        "skinfolds": { "triceps": 18 } });
    let output = validate_case(&case(draft), &EngineConfig::default()).unwrap();
    assert_eq!(output, "missing for jackson_pollock_3: Supra-ilíaca, Coxa");
}

#[test]
fn save_appends_to_history() {
    let output = save_case(&case(full_draft()), &EngineConfig::default(), None).unwrap();
    let history: Vec<Value> = serde_json::from_str(&output).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1]["date"], "2024-03-05");
}

#[test]
fn save_refuses_incomplete_drafts() {
    let draft = json!({ "weight": 64, "height": 1.65, "procedure_date": "2024-03-05" });
    let err = save_case(&case(draft), &EngineConfig::default(), None).unwrap_err();
    assert!(err.to_string().contains("Peitoral"));
}

#[test]
fn snapshot_formats() {
    let case = case(full_draft());
    let config = EngineConfig::default();

    let json = snapshot_case(&case, &config, SnapshotFormat::Json).unwrap();
    assert!(json.contains("\"bodyComp\""));

    let prompt = snapshot_case(&case, &config, SnapshotFormat::Prompt).unwrap();
    assert!(prompt.starts_with("<anthropometry source=\"form\""));

    let report = snapshot_case(&case, &config, SnapshotFormat::Report).unwrap();
    assert!(report.contains("Recomposição corporal"));
}

#[test]
fn snapshot_without_height_fails() {
    let err = snapshot_case(
        &case(json!({ "weight": 64 })),
        &EngineConfig::default(),
        SnapshotFormat::Json,
    )
    .unwrap_err();
    assert!(err.to_string().contains("sem altura"));
}

#[test]
fn stale_uses_the_configured_threshold() {
    let case = case(full_draft());
    let status: Value =
        serde_json::from_str(&stale_case(&case, &EngineConfig::default()).unwrap()).unwrap();
    assert_eq!(status["stale"], true);
    assert_eq!(status["days_since_last"], 64);

    let lenient = EngineConfig {
        staleness_threshold_days: 90,
        ..Default::default()
    };
    let status: Value = serde_json::from_str(&stale_case(&case, &lenient).unwrap()).unwrap();
    assert_eq!(status["stale"], false);
}
