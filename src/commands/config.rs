//! Config subcommands handler

use std::path::{Path, PathBuf};

use anyhow::Result;

use folio::tui::current_theme;
use folio::Config;

use super::load_config;

fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}

/// Show the effective configuration as TOML.
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Print where the config file lives (or would live).
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(config_path)?;
    println!("{}", path.display());
    Ok(())
}

/// Write the default configuration. An existing file is left untouched.
pub fn handle_init(config_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(config_path)?;
    let theme = current_theme();

    if path.exists() {
        println!(
            "{}",
            theme.secondary_text(&format!(
                "Config already exists at {}, not overwriting.",
                path.display()
            ))
        );
        return Ok(());
    }

    Config::default().save_to(&path)?;
    tracing::info!(path = %path.display(), "wrote default config");
    println!(
        "{}",
        theme.success_text(&format!("Created config at {}", path.display()))
    );
    Ok(())
}
