//! Non-interactive command runner

use std::cell::Cell;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use folio::cli::CatalogArg;
use folio::shell::{BootTiming, EntryKind};
use folio::tui::Prompt;
use folio::Session;

use super::{load_catalog, load_config, resolve_theme};

/// Submit `lines` to a freshly booted session and print the transcript.
pub fn handle(config_path: Option<&Path>, catalog: &CatalogArg, lines: &[String]) -> Result<()> {
    let config = load_config(config_path)?;
    let catalog = load_catalog(catalog, &config)?;
    let prompt = Prompt::new(config.prompt.user.clone(), config.prompt.host.clone());
    let theme = resolve_theme(&config.display.theme)?;

    let closed = Cell::new(false);
    let mut session = Session::new(&catalog, BootTiming::instant(), Box::new(|| closed.set(true)));
    let now = Instant::now();
    session.activate(now);
    session.tick(now);

    for line in lines {
        let before = session.transcript().len();
        session.submit(line);
        if closed.get() {
            tracing::info!("exec stopped at exit");
            break;
        }

        // A shorter transcript means it was cleared: nothing new to show.
        let entries = session.transcript().entries();
        if entries.len() <= before {
            continue;
        }
        for entry in &entries[before..] {
            match entry.kind {
                EntryKind::Command => println!(
                    "{}{}",
                    theme.accent_text(&prompt.plain()),
                    theme.primary_text(&entry.content)
                ),
                EntryKind::Response => println!("{}", theme.primary_text(&entry.content)),
            }
        }
    }

    session.teardown();
    Ok(())
}
