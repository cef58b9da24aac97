//! Folio - a boot-sequence terminal for browsing a developer portfolio.
//!
//! The crate is split into a UI-independent core and its front ends:
//!
//! - [`catalog`]: the read-only project list
//! - [`shell`]: boot sequencer, command interpreter and transcript
//! - [`tui`]: ratatui/crossterm rendering and input
//! - [`config`]: TOML configuration
//! - [`cli`]: clap definitions for the `folio` binary

pub mod catalog;
pub mod cli;
pub mod config;
pub mod shell;
pub mod tui;

pub use catalog::{Catalog, CatalogError, ProjectLinks, ProjectRecord};
pub use config::{Config, ConfigError};
pub use shell::{InterpreterState, Session};
