//! The `config` subcommands

use tempfile::TempDir;

use crate::helpers::{config_path, run_folio, write_file};

#[test]
fn path_prints_the_override() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(&home, &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), config_path(&home).display().to_string());
}

#[test]
fn show_without_file_prints_defaults() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(&home, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[boot]"));
    assert!(stdout.contains("min_delay_ms = 100"));
    assert!(stdout.contains("max_delay_ms = 400"));
    assert!(stdout.contains("settle_ms = 500"));
    assert!(stdout.contains("theme = \"classic\""));
}

#[test]
fn init_writes_file_once() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(&home, &["config", "init"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Created config"));
    assert!(config_path(&home).exists());

    std::fs::write(config_path(&home), "[prompt]\nuser = \"kept\"\n").unwrap();
    let (stdout, _stderr, exit_code) = run_folio(&home, &["config", "init"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("not overwriting"));
    let content = std::fs::read_to_string(config_path(&home)).unwrap();
    assert!(content.contains("kept"));
}

#[test]
fn invalid_timing_is_reported() {
    let home = TempDir::new().unwrap();
    write_file(
        home.path(),
        "config.toml",
        "[boot]\nmin_delay_ms = 500\nmax_delay_ms = 100\n",
    );
    let (_stdout, stderr, exit_code) = run_folio(&home, &["config", "show"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("min_delay_ms (500) must be less than max_delay_ms (100)"));
}

#[test]
fn log_file_receives_tracing_output() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("folio.log");
    let (_stdout, _stderr, exit_code) =
        run_folio(&home, &["--log-file", log.to_str().unwrap(), "exec", "exit"]);

    assert_eq!(exit_code, 0);
    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("terminal ready"));
    assert!(content.contains("session close requested"));
}
