use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Anthropometric body-composition engine.
#[derive(Parser, Debug)]
#[command(name = "anthro")]
#[command(about = "Body-composition metrics, save validation and snapshots from a case file")]
#[command(version)]
pub struct Cli {
    /// Config file. Defaults to the platform config directory.
    #[arg(long, global = true, env = "ANTHRO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute metrics for the draft (or the persisted set).
    Compute { case: PathBuf },

    /// List required skinfolds the draft is missing.
    Validate { case: PathBuf },

    /// Validate the draft and merge it into the case history.
    Save {
        case: PathBuf,
        /// Date of the history entry being edited.
        #[arg(long)]
        edit_date: Option<String>,
    },

    /// Build the snapshot handed to the narrative service and report renderer.
    Snapshot {
        case: PathBuf,
        #[arg(long, value_enum, default_value_t = SnapshotFormat::Json)]
        format: SnapshotFormat,
    },

    /// Report how long ago the last assessment was.
    Stale { case: PathBuf },

    /// List supported protocols and their sites.
    Protocols,

    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    Show,
    /// Write a default config if none exists.
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnapshotFormat {
    Json,
    Prompt,
    Report,
}
