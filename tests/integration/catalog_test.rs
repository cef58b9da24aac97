//! The `projects` subcommand and catalog loading errors

use tempfile::TempDir;

use crate::helpers::{run_folio, write_file, SMALL_CATALOG};

#[test]
fn builtin_projects_show_details() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(&home, &["projects"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("01  Kitsu URL Shortener"));
    assert!(stdout.contains("04  TubeTune Quality Auto-Set"));
    assert!(stdout.contains("repo: https://github.com/ShubhmDalvi/grb"));
    assert!(stdout.contains("demo: https://qsharetool.netlify.app"));
}

#[test]
fn single_project_by_id() {
    let home = TempDir::new().unwrap();
    let catalog = write_file(home.path(), "projects.toml", SMALL_CATALOG);
    let (stdout, _stderr, exit_code) = run_folio(
        &home,
        &["projects", "--catalog", catalog.to_str().unwrap(), "b"],
    );

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        "b  Beta\n  Second project\n  tech: Go\n  demo: https://beta.example.com\n"
    );
}

#[test]
fn unknown_project_id_fails() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_folio(&home, &["projects", "99"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No project with id '99'"));
}

#[test]
fn json_catalog_is_accepted() {
    let home = TempDir::new().unwrap();
    let json = r##"{"projects": [{
        "id": "x", "title": "Xylo", "tech": ["Zig"], "description": "d",
        "links": {"repository": "", "demo": ""}, "accent_color": "#123456"
    }]}"##;
    let catalog = write_file(home.path(), "projects.json", json);
    let (stdout, _stderr, exit_code) = run_folio(
        &home,
        &["exec", "--catalog", catalog.to_str().unwrap(), "ls"],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("> Xylo [Zig]"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let home = TempDir::new().unwrap();
    let toml = format!("{}{}", SMALL_CATALOG, SMALL_CATALOG);
    let catalog = write_file(home.path(), "dup.toml", &toml);
    let (_stdout, stderr, exit_code) = run_folio(
        &home,
        &["projects", "--catalog", catalog.to_str().unwrap()],
    );

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Duplicate project id 'a'"));
}

#[test]
fn unsupported_extension_is_rejected() {
    let home = TempDir::new().unwrap();
    let catalog = write_file(home.path(), "projects.yaml", "projects: []");
    let (_stdout, stderr, exit_code) = run_folio(
        &home,
        &["projects", "--catalog", catalog.to_str().unwrap()],
    );

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Unsupported catalog format 'yaml'"));
}

#[test]
fn catalog_from_config_file_is_used() {
    let home = TempDir::new().unwrap();
    let catalog = write_file(home.path(), "projects.toml", SMALL_CATALOG);
    write_file(
        home.path(),
        "config.toml",
        &format!("catalog = {:?}\n", catalog.to_str().unwrap()),
    );
    let (stdout, _stderr, exit_code) = run_folio(&home, &["exec", "ls"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("> Alpha [Rust, Tokio]"));
}
