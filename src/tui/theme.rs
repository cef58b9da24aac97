//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the terminal window) and ANSI escape
//! codes (for plain CLI output).

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (command output)
    pub text_primary: Color,
    /// Secondary/dimmed text color (boot log, hints)
    pub text_secondary: Color,
    /// Accent color for borders, cursor and highlights
    pub accent: Color,
    /// Prompt user name color
    pub prompt_user: Color,
    /// Prompt host and path color
    pub prompt_host: Color,
    /// Success color (boot `[OK]` prefix)
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Names accepted by [`Theme::by_name`].
    pub const NAMES: [&'static str; 3] = ["classic", "ocean", "matrix"];

    /// Classic zsh look - gray output, green user, blue host.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            prompt_user: Color::Green,
            prompt_host: Color::Blue,
            success: Color::Green,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            prompt_user: Color::LightCyan,
            prompt_host: Color::Blue,
            success: Color::LightBlue,
        }
    }

    /// Green-on-black.
    pub fn matrix() -> Self {
        Self {
            text_primary: Color::LightGreen,
            text_secondary: Color::Green,
            accent: Color::LightGreen,
            prompt_user: Color::LightGreen,
            prompt_host: Color::Green,
            success: Color::LightGreen,
        }
    }

    /// Look a theme up by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            "matrix" => Some(Self::matrix()),
            _ => None,
        }
    }

    // Style helpers

    /// Style for command output.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for the prompt user name.
    pub fn prompt_user_style(&self) -> Style {
        Style::default()
            .fg(self.prompt_user)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the prompt host and path.
    pub fn prompt_host_style(&self) -> Style {
        Style::default().fg(self.prompt_host)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(color_to_ansi(self.accent), text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(color_to_ansi(self.text_primary), text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(color_to_ansi(self.text_secondary), text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(color_to_ansi(self.success), text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Wrap text in a color code, or leave it bare when color is disabled.
fn paint(code: &str, text: &str) -> String {
    if code.is_empty() || !color_enabled() {
        return text.to_string();
    }
    format!("{}{}{}", code, text, ANSI_RESET)
}

/// Format text in a 24-bit color (project accent colors).
pub fn rgb_text(rgb: (u8, u8, u8), text: &str) -> String {
    if !color_enabled() {
        return text.to_string();
    }
    format!("\x1b[38;2;{};{};{}m{}{}", rgb.0, rgb.1, rgb.2, text, ANSI_RESET)
}

/// Whether CLI output should carry ANSI colors.
///
/// Disabled by `NO_COLOR` (any value) or when stdout is not a terminal.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to no color
        _ => "",
    }
}

/// Theme used when nothing else is configured.
pub fn current_theme() -> Theme {
    Theme::default()
}
