//! TUI (Text User Interface) module for folio
//!
//! Renders a terminal session full-screen using ratatui/crossterm and routes
//! keyboard input into it.

pub mod app;
pub mod input;
pub mod terminal_app;
pub mod theme;
pub mod ui;

pub use app::{App, InputResult};
pub use terminal_app::{TerminalApp, TerminalOptions};
pub use theme::{current_theme, Theme};
pub use ui::Prompt;
