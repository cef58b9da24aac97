//! Interactive terminal handler

use std::path::Path;

use anyhow::Result;

use folio::cli::RunArgs;
use folio::shell::BootTiming;
use folio::tui::{Prompt, TerminalApp, TerminalOptions};

use super::{load_catalog, load_config, resolve_theme};

/// Open the full-screen terminal.
pub fn handle(config_path: Option<&Path>, args: RunArgs) -> Result<()> {
    let config = load_config(config_path)?;
    let catalog = load_catalog(&args.catalog, &config)?;

    let theme = resolve_theme(args.theme.as_deref().unwrap_or(&config.display.theme))?;

    let timing = if args.instant {
        BootTiming::instant()
    } else {
        config.boot_timing()?
    };

    let options = TerminalOptions {
        timing,
        prompt: Prompt::new(config.prompt.user.clone(), config.prompt.host.clone()),
        theme,
        seed: args.seed,
    };

    tracing::info!(projects = catalog.len(), "opening terminal");
    let mut app = TerminalApp::new(&catalog, options)?;
    app.run()
}
