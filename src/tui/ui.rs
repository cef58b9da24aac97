//! UI rendering for the terminal window
//!
//! Turns a [`Session`] into styled lines: the boot log first, then the
//! transcript, then (once ready) the live input line. The window is drawn
//! as a bordered block titled like a zsh tab.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::status_footer::render_footer;
use super::theme::Theme;
use crate::shell::{EntryKind, Session};

/// Prefix shown before every boot line.
pub const BOOT_PREFIX: &str = "[OK]";

/// Cursor glyph drawn after the input buffer.
pub const CURSOR: &str = "\u{2588}";

/// Keybinding hints under the window.
pub const FOOTER_KEYS: &[(&str, &str)] =
    &[("Enter", "run"), ("Esc", "close"), ("help", "commands")];

/// Shell prompt identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub user: String,
    pub host: String,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            host: "portfolio".to_string(),
        }
    }
}

impl Prompt {
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
        }
    }

    /// Window title, e.g. `user@portfolio: ~ (zsh)`.
    pub fn title(&self) -> String {
        format!("{}@{}: ~ (zsh)", self.user, self.host)
    }

    /// Prompt as plain text, e.g. `user@portfolio:~$ `.
    pub fn plain(&self) -> String {
        format!("{}@{}:~$ ", self.user, self.host)
    }

    /// Prompt as styled spans.
    pub fn spans(&self, theme: &Theme) -> Vec<Span<'static>> {
        vec![
            Span::styled(self.user.clone(), theme.prompt_user_style()),
            Span::styled("@", theme.text_secondary_style()),
            Span::styled(self.host.clone(), theme.prompt_host_style()),
            Span::styled(":", theme.text_secondary_style()),
            Span::styled("~", theme.prompt_host_style()),
            Span::styled("$ ", theme.text_secondary_style()),
        ]
    }
}

/// Build every line of the terminal body, in display order.
pub fn build_terminal_lines(
    session: &Session,
    prompt: &Prompt,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for boot in session.boot_lines() {
        lines.push(Line::from(vec![
            Span::styled(BOOT_PREFIX, theme.success_style()),
            Span::raw(" "),
            Span::styled(boot.text.clone(), theme.text_secondary_style()),
        ]));
    }

    for entry in session.transcript().iter() {
        match entry.kind {
            EntryKind::Command => {
                let mut spans = prompt.spans(theme);
                spans.push(Span::styled(entry.content.clone(), theme.text_style()));
                lines.push(Line::from(spans));
            }
            EntryKind::Response => {
                for text in entry.content.lines() {
                    lines.push(Line::from(Span::styled(text.to_string(), theme.text_style())));
                }
            }
        }
    }

    if session.is_ready() {
        let mut spans = prompt.spans(theme);
        spans.push(Span::styled(session.input().to_string(), theme.text_style()));
        spans.push(Span::styled(CURSOR, theme.accent_style()));
        lines.push(Line::from(spans));
    }

    lines
}

/// Scroll offset that keeps the last line visible.
pub fn bottom_scroll(line_count: usize, height: u16) -> u16 {
    line_count.saturating_sub(height as usize).min(u16::MAX as usize) as u16
}

/// Render the terminal window and footer into `area`.
pub fn render_terminal(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    prompt: &Prompt,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(format!(" {} ", prompt.title()));
    let inner_height = block.inner(chunks[0]).height;

    let lines = build_terminal_lines(session, prompt, theme);
    let scroll = bottom_scroll(lines.len(), inner_height);
    let body = Paragraph::new(lines).block(block).scroll((scroll, 0));

    frame.render_widget(body, chunks[0]);
    render_footer(frame, chunks[1], FOOTER_KEYS, theme);
}

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}
