//! Subcommand handlers for the `folio` binary

pub mod completions;
pub mod config;
pub mod exec;
pub mod projects;
pub mod run;

use std::path::Path;

use anyhow::{bail, Context, Result};

use folio::cli::CatalogArg;
use folio::tui::Theme;
use folio::{Catalog, Config};

/// Load the config from `--config` or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Resolve the catalog: `--catalog`, then the config file, then builtin.
pub fn load_catalog(arg: &CatalogArg, config: &Config) -> Result<Catalog> {
    match arg.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

/// Look up a theme by name, failing on names that are not built in.
pub fn resolve_theme(name: &str) -> Result<Theme> {
    match Theme::by_name(name) {
        Some(theme) => Ok(theme),
        None => bail!(
            "Unknown theme '{}' (expected one of: {})",
            name,
            Theme::NAMES.join(", ")
        ),
    }
}
