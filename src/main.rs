use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::cli::{Cli, Commands, ConfigCommands, RunArgs};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config_path = cli.config.as_deref();
    match cli.command {
        None => commands::run::handle(config_path, RunArgs::default()),
        Some(Commands::Run(args)) => commands::run::handle(config_path, args),
        Some(Commands::Exec { catalog, lines }) => {
            commands::exec::handle(config_path, &catalog, &lines)
        }
        Some(Commands::Projects { catalog, id }) => {
            commands::projects::handle(config_path, &catalog, id.as_deref())
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init => commands::config::handle_init(config_path),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}

/// Send tracing output to `path`, if given.
///
/// Nothing is logged otherwise: the interactive terminal owns stdout and
/// stderr while it runs.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
