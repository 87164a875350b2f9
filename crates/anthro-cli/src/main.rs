use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use anthro_cli::cli::Cli;
use anthro_cli::commands;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let output = commands::run(&cli)?;
    println!("{output}");

    Ok(())
}
