//! Project catalog
//!
//! The read-only, ordered list of project records that the `ls`/`list`
//! command renders. A catalog is built once at startup, either from the
//! builtin reference data or from a TOML/JSON file, and borrowed by every
//! terminal session for its whole lifetime.

mod builtin;
mod error;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use builtin::builtin_records;
pub use error::CatalogError;

/// Repository and live-demo links for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub repository: String,
    pub demo: String,
}

/// A single project shown in the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    /// Technologies in display order (never empty in a validated catalog)
    pub tech: Vec<String>,
    pub description: String,
    pub links: ProjectLinks,
    /// Accent color as `#rrggbb`
    pub accent_color: String,
}

impl ProjectRecord {
    /// Tech list joined the way the terminal listing shows it.
    pub fn tech_csv(&self) -> String {
        self.tech.join(", ")
    }

    /// Accent color as an RGB triple, if it is a valid `#rrggbb` string.
    pub fn accent_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.accent_color)
    }
}

/// Parse a `#rrggbb` color string.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// On-disk shape of a catalog file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

/// Ordered, immutable collection of validated project records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog, checking that every record has a tech list,
    /// a well-formed accent color and an id unique within the catalog.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.tech.is_empty() {
                return Err(CatalogError::EmptyTech {
                    id: record.id.clone(),
                });
            }
            if record.accent_rgb().is_none() {
                return Err(CatalogError::InvalidColor {
                    id: record.id.clone(),
                    color: record.accent_color.clone(),
                });
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    /// A catalog with no projects.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The reference catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            records: builtin_records(),
        }
    }

    /// Load a catalog from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match extension.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            _ => return Err(CatalogError::UnsupportedFormat { extension }),
        };

        tracing::info!(
            path = %path.display(),
            projects = catalog.len(),
            "loaded project catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from TOML (`[[projects]]` tables).
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.projects)
    }

    /// Parse a catalog from JSON (`{"projects": [...]}`).
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.projects)
    }

    /// Records in catalog order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.records.iter()
    }

    /// Look a record up by its id.
    pub fn find(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(id: &str, tech: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            title: format!("Project {}", id),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            description: String::new(),
            links: ProjectLinks {
                repository: "https://example.com/repo".to_string(),
                demo: "https://example.com".to_string(),
            },
            accent_color: "#112233".to_string(),
        }
    }

    #[test]
    fn builtin_catalog_has_four_projects_in_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["01", "02", "03", "04"]);
        assert_eq!(catalog.records()[0].title, "Kitsu URL Shortener");
    }

    #[test]
    fn builtin_records_pass_validation() {
        assert!(Catalog::new(builtin_records()).is_ok());
    }

    #[test]
    fn new_rejects_empty_tech() {
        let err = Catalog::new(vec![make_record("a", &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTech { ref id } if id == "a"));
    }

    #[test]
    fn new_rejects_duplicate_id() {
        let records = vec![make_record("a", &["Rust"]), make_record("a", &["Go"])];
        let err = Catalog::new(records).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "a"));
    }

    #[test]
    fn new_rejects_bad_accent_color() {
        let mut record = make_record("a", &["Rust"]);
        record.accent_color = "green".to_string();
        let err = Catalog::new(vec![record]).unwrap_err();
        assert!(err.to_string().contains("green"));
    }

    #[test]
    fn tech_csv_joins_with_comma_space() {
        let record = make_record("a", &["Spring Boot", "React", "Tailwind"]);
        assert_eq!(record.tech_csv(), "Spring Boot, React, Tailwind");
    }

    #[test]
    fn parse_hex_color_accepts_valid_values() {
        assert_eq!(parse_hex_color("#4ade80"), Some((0x4a, 0xde, 0x80)));
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
    }

    #[test]
    fn parse_hex_color_rejects_invalid_values() {
        assert_eq!(parse_hex_color("4ade80"), None);
        assert_eq!(parse_hex_color("#4ade8"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn from_toml_str_reads_projects() {
        let content = r##"
[[projects]]
id = "x1"
title = "Tool"
tech = ["Rust", "CLI"]
description = "A tool"
accent_color = "#000000"

[projects.links]
repository = "https://example.com/tool"
demo = "https://tool.example.com"
"##;
        let catalog = Catalog::from_toml_str(content).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].tech, vec!["Rust", "CLI"]);
        assert_eq!(catalog.records()[0].links.demo, "https://tool.example.com");
    }

    #[test]
    fn from_toml_str_empty_file_is_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn from_json_str_reads_projects() {
        let content = r##"{"projects": [{
            "id": "j1", "title": "Json", "tech": ["Go"], "description": "",
            "links": {"repository": "r", "demo": "d"}, "accent_color": "#abcdef"
        }]}"##;
        let catalog = Catalog::from_json_str(content).unwrap();
        assert_eq!(catalog.find("j1").map(|r| r.title.as_str()), Some("Json"));
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        assert!(Catalog::builtin().find("99").is_none());
    }
}
