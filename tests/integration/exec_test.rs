//! Non-interactive command execution

use tempfile::TempDir;

use crate::helpers::{run_folio, write_file, SMALL_CATALOG};

const PROMPT: &str = "user@portfolio:~$ ";

#[test]
fn help_prints_command_and_response() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(&home, &["exec", "help"]);

    assert_eq!(exit_code, 0);
    let expected = format!(
        "{}help\n\
         Available commands:\n  \
         ls / list - List all projects\n  \
         about     - Who am I?\n  \
         contact   - Display contact info\n  \
         clear     - Clear terminal\n  \
         exit      - Return to GUI mode\n",
        PROMPT
    );
    assert_eq!(stdout, expected);
}

#[test]
fn ls_lists_builtin_projects_in_order() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(&home, &["exec", "ls"]);

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "user@portfolio:~$ ls",
            "> Kitsu URL Shortener [Spring Boot, React, Tailwind]",
            "> grb (Grab) CLI [GoLang, CLI, TUI]",
            "> QShare Network Transfer [GoLang, Networking, CLI]",
            "> TubeTune Quality Auto-Set [JavaScript, Chrome Ext, DOM]",
        ]
    );
}

#[test]
fn input_is_echoed_raw_but_matched_normalized() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, _exit_code) = run_folio(&home, &["exec", "  ABOUT "]);

    assert!(stdout.starts_with("user@portfolio:~$   ABOUT \n"));
    assert!(stdout.contains("Identity: Creative Developer"));
}

#[test]
fn unknown_command_reports_normalized_token() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(&home, &["exec", "  Foo  "]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("zsh: command not found: foo"));
}

#[test]
fn blank_line_echoes_prompt_only() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, _exit_code) = run_folio(&home, &["exec", "   "]);

    assert_eq!(stdout, format!("{}   \n", PROMPT));
}

#[test]
fn clear_prints_nothing_for_itself() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, _exit_code) = run_folio(&home, &["exec", "about", "clear", "contact"]);

    assert!(stdout.contains("about"));
    assert!(!stdout.contains("clear"));
    assert!(stdout.contains("Email: shubhmdalvi@gmail.com"));
}

#[test]
fn exit_stops_further_lines() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(&home, &["exec", "about", "exit", "contact"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Identity: Creative Developer"));
    assert!(!stdout.contains("exit"));
    assert!(!stdout.contains("Email:"));
}

#[test]
fn catalog_flag_replaces_builtin_projects() {
    let home = TempDir::new().unwrap();
    let catalog = write_file(home.path(), "projects.toml", SMALL_CATALOG);
    let (stdout, _stderr, exit_code) = run_folio(
        &home,
        &["exec", "--catalog", catalog.to_str().unwrap(), "list"],
    );

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        format!("{}list\n> Alpha [Rust, Tokio]\n> Beta [Go]\n", PROMPT)
    );
}

#[test]
fn configured_prompt_is_used() {
    let home = TempDir::new().unwrap();
    write_file(
        home.path(),
        "config.toml",
        "[prompt]\nuser = \"guest\"\nhost = \"box\"\n",
    );
    let (stdout, _stderr, _exit_code) = run_folio(&home, &["exec", "ls"]);

    assert!(stdout.starts_with("guest@box:~$ ls\n"));
}

#[test]
fn unknown_configured_theme_is_rejected() {
    let home = TempDir::new().unwrap();
    write_file(home.path(), "config.toml", "[display]\ntheme = \"neon\"\n");
    let (stdout, stderr, exit_code) = run_folio(&home, &["exec", "help"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Unknown theme 'neon'"));
}
