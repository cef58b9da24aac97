//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Run folio with colors off and an isolated config, capturing output.
///
/// The config path points into `home`, so the user's real config is never
/// read. Returns (stdout, stderr, exit code).
pub fn run_folio(home: &TempDir, args: &[&str]) -> (String, String, i32) {
    let config = config_path(home);
    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("FOLIO_LOG")
        .output()
        .expect("Failed to execute folio");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Config file location used by [`run_folio`].
pub fn config_path(home: &TempDir) -> PathBuf {
    home.path().join("config.toml")
}

/// Write `content` to `name` inside `dir` and return its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// A two-project TOML catalog.
pub const SMALL_CATALOG: &str = r##"
[[projects]]
id = "a"
title = "Alpha"
tech = ["Rust", "Tokio"]
description = "First project"
accent_color = "#ff0000"

[projects.links]
repository = "https://example.com/alpha"
demo = ""

[[projects]]
id = "b"
title = "Beta"
tech = ["Go"]
description = "Second project"
accent_color = "#00ff00"

[projects.links]
repository = ""
demo = "https://beta.example.com"
"##;
