//! Subcommand implementations. Each returns the text to print.

use std::path::Path;

use anthro_export::render::{render_default_report, render_report};
use anthro_history::save::{SaveRequest, prepare_save};
use anthro_protocols::calculator::compute;
use anthro_protocols::registry::catalogue;
use anthro_protocols::validate::validate_for_save;
use anthro_snapshot::builder::{SnapshotRequest, build_snapshot};
use anthro_snapshot::prompt::{to_payload, to_prompt_block};
use tracing::warn;

use crate::case::CaseFile;
use crate::cli::{Cli, Command, ConfigAction, SnapshotFormat};
use crate::config::{EngineConfig, default_config_path, load_config, save_config};

pub fn run(cli: &Cli) -> eyre::Result<String> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let config = load_config(&config_path)?;

    match &cli.command {
        Command::Compute { case } => compute_case(&CaseFile::load(case)?, &config),
        Command::Validate { case } => validate_case(&CaseFile::load(case)?, &config),
        Command::Save { case, edit_date } => {
            save_case(&CaseFile::load(case)?, &config, edit_date.as_deref())
        }
        Command::Snapshot { case, format } => {
            snapshot_case(&CaseFile::load(case)?, &config, *format)
        }
        Command::Stale { case } => stale_case(&CaseFile::load(case)?, &config),
        Command::Protocols => Ok(serde_json::to_string_pretty(&catalogue())?),
        Command::Config { action } => config_command(action, &config, &config_path),
    }
}

pub fn compute_case(case: &CaseFile, config: &EngineConfig) -> eyre::Result<String> {
    let set = case
        .working_set()
        .ok_or_else(|| eyre::eyre!("case has neither a draft nor a persisted measurement set"))?;
    let protocol = set.effective_protocol(config.default_protocol);
    let result = compute(set, case.age(), case.patient.formula_gender(), protocol);
    Ok(serde_json::to_string_pretty(&result)?)
}

pub fn validate_case(case: &CaseFile, config: &EngineConfig) -> eyre::Result<String> {
    let set = case
        .draft
        .as_ref()
        .ok_or_else(|| eyre::eyre!("case has no draft to validate"))?;
    let protocol = set.effective_protocol(config.default_protocol);
    let missing = validate_for_save(set, Some(protocol), case.patient.formula_gender());

    if missing.is_empty() {
        return Ok(format!("complete for {protocol}"));
    }
    let labels: Vec<_> = missing.iter().map(|m| m.label.as_str()).collect();
    Ok(format!("missing for {protocol}: {}", labels.join(", ")))
}

pub fn save_case(
    case: &CaseFile,
    config: &EngineConfig,
    edit_date: Option<&str>,
) -> eyre::Result<String> {
    let set = case
        .draft
        .as_ref()
        .ok_or_else(|| eyre::eyre!("case has no draft to save"))?;
    let request = SaveRequest {
        set,
        age: case.age(),
        gender: case.patient.formula_gender(),
        protocol: set.effective_protocol(config.default_protocol),
        edit_date,
    };

    let outcome = prepare_save(request, &case.history)?;
    tracing::info!(
        date = %outcome.record.date,
        replaced = outcome.replaced,
        entries = outcome.history.len(),
        "history reconciled"
    );
    Ok(serde_json::to_string_pretty(&outcome.history)?)
}

pub fn snapshot_case(
    case: &CaseFile,
    config: &EngineConfig,
    format: SnapshotFormat,
) -> eyre::Result<String> {
    let result = build_snapshot(SnapshotRequest {
        patient: &case.patient,
        persisted: case.persisted.as_ref(),
        draft: case.draft.as_ref(),
        as_of: case.as_of(),
        default_protocol: config.default_protocol,
    });
    for warning in &result.warnings {
        warn!(%warning, "snapshot");
    }

    let snapshot = result.require()?;
    match format {
        SnapshotFormat::Json => Ok(to_payload(&snapshot)?),
        SnapshotFormat::Prompt => Ok(to_prompt_block(&snapshot)),
        SnapshotFormat::Report => match &config.report_template {
            Some(path) => {
                let template = read_template(path)?;
                Ok(render_report("custom", &template, &snapshot)?)
            }
            None => Ok(render_default_report(&snapshot)?),
        },
    }
}

pub fn stale_case(case: &CaseFile, config: &EngineConfig) -> eyre::Result<String> {
    let status = config
        .staleness_policy()
        .evaluate(&case.history, case.as_of());
    Ok(serde_json::to_string_pretty(&status)?)
}

fn config_command(
    action: &ConfigAction,
    config: &EngineConfig,
    path: &Path,
) -> eyre::Result<String> {
    match action {
        ConfigAction::Show => Ok(serde_json::to_string_pretty(config)?),
        ConfigAction::Init => {
            if path.exists() {
                return Ok(format!("config already exists at {}", path.display()));
            }
            save_config(&EngineConfig::default(), path)?;
            Ok(format!("config written to {}", path.display()))
        }
    }
}

fn read_template(path: &Path) -> eyre::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read report template {}: {e}", path.display()))
}
