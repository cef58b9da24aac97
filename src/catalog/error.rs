//! Catalog loading and validation errors.

use std::path::PathBuf;

/// Errors that can occur while building or loading a project catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported catalog format '{extension}' (expected .toml or .json)")]
    UnsupportedFormat { extension: String },

    #[error("Project '{id}' has an empty tech list")]
    EmptyTech { id: String },

    #[error("Duplicate project id '{id}'")]
    DuplicateId { id: String },

    #[error("Project '{id}' has invalid accent color '{color}' (expected #rrggbb)")]
    InvalidColor { id: String, color: String },
}
