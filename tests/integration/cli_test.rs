//! Help, version and completion output

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::run_folio;

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(&home, &["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("boot-sequence terminal"));
    for sub in ["run", "exec", "projects", "config", "completions"] {
        assert!(stdout.contains(sub), "missing {} in help", sub);
    }
}

#[test]
fn version_prints_package_version() {
    Command::cargo_bin("folio")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn exec_without_lines_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_folio(&home, &["exec"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<LINE>"));
}

#[test]
fn unknown_theme_is_rejected_before_opening_the_terminal() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_folio(&home, &["run", "--theme", "neon"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Unknown theme 'neon'"));
}

#[test]
fn completions_for_bash_mention_binary() {
    Command::cargo_bin("folio")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_folio"));
}
