//! Project catalog listing

use std::path::Path;

use anyhow::{bail, Result};

use folio::cli::CatalogArg;
use folio::tui::current_theme;
use folio::tui::theme::rgb_text;
use folio::ProjectRecord;

use super::{load_catalog, load_config};

/// Print every project, or only the one with `id`.
pub fn handle(config_path: Option<&Path>, catalog: &CatalogArg, id: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let catalog = load_catalog(catalog, &config)?;

    let selected: Vec<&ProjectRecord> = match id {
        Some(id) => match catalog.find(id) {
            Some(record) => vec![record],
            None => bail!("No project with id '{}'", id),
        },
        None => catalog.iter().collect(),
    };

    if selected.is_empty() {
        let theme = current_theme();
        println!("{}", theme.secondary_text("No projects in catalog."));
        return Ok(());
    }

    let blocks: Vec<String> = selected.into_iter().map(format_record).collect();
    println!("{}", blocks.join("\n\n"));
    Ok(())
}

fn format_record(record: &ProjectRecord) -> String {
    let theme = current_theme();
    let heading = format!("{}  {}", record.id, record.title);
    let heading = match record.accent_rgb() {
        Some(rgb) => rgb_text(rgb, &heading),
        None => theme.accent_text(&heading),
    };

    let mut lines = vec![
        heading,
        format!("  {}", theme.primary_text(&record.description)),
        format!("  {} {}", theme.secondary_text("tech:"), record.tech_csv()),
    ];
    if !record.links.repository.is_empty() {
        lines.push(format!(
            "  {} {}",
            theme.secondary_text("repo:"),
            record.links.repository
        ));
    }
    if !record.links.demo.is_empty() {
        lines.push(format!("  {} {}", theme.secondary_text("demo:"), record.links.demo));
    }
    lines.join("\n")
}
