//! Command interpreter: parsing and dispatch.
//!
//! Parsing turns a raw input line into a [`Command`]; dispatch turns a
//! command into an [`Output`]. Both steps are pure so they can be tested
//! without a session. Unknown input is an ordinary command variant, not an
//! error.

use crate::catalog::Catalog;

/// Response text for `help`.
pub const HELP_TEXT: &str = "Available commands:\n  \
ls / list - List all projects\n  \
about     - Who am I?\n  \
contact   - Display contact info\n  \
clear     - Clear terminal\n  \
exit      - Return to GUI mode";

/// Response text for `about`.
pub const ABOUT_TEXT: &str = "Identity: Creative Developer\n\
Mission: Bridging code and design.\n\
Status: Open to opportunities.";

/// Response text for `contact`.
pub const CONTACT_TEXT: &str = "Email: shubhmdalvi@gmail.com\n\
GitHub: github.com/ShubhmDalvi\n\
LinkedIn: linkedin.com/in/shubhmdalvi";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    About,
    Contact,
    Clear,
    Exit,
    /// Blank or whitespace-only input
    Empty,
    /// Anything else, carrying the normalized (trimmed, lowercased) input
    Unknown(String),
}

impl Command {
    /// Parse a raw input line.
    ///
    /// Matching is exact on the whole trimmed, lowercased line, so
    /// `"ls now"` is unknown rather than `ls` with an argument.
    pub fn parse(raw: &str) -> Self {
        let token = normalize(raw);
        match token.as_str() {
            "help" => Command::Help,
            "ls" | "list" => Command::List,
            "about" => Command::About,
            "contact" => Command::Contact,
            "clear" => Command::Clear,
            "exit" => Command::Exit,
            "" => Command::Empty,
            _ => Command::Unknown(token),
        }
    }

    /// Command name as typed, for logging.
    pub fn name(&self) -> &str {
        match self {
            Command::Help => "help",
            Command::List => "ls",
            Command::About => "about",
            Command::Contact => "contact",
            Command::Clear => "clear",
            Command::Exit => "exit",
            Command::Empty => "",
            Command::Unknown(token) => token,
        }
    }
}

/// Trimmed, lowercased form of the input used for matching.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Record the command; show this text as the response unless it is empty
    Text(String),
    /// Wipe boot log, transcript and input; record nothing
    Clear,
    /// Ask the host to close the session; record nothing
    Exit,
}

/// Decide the outcome of a command against the catalog.
pub fn dispatch(command: &Command, catalog: &Catalog) -> Output {
    match command {
        Command::Help => Output::Text(HELP_TEXT.to_string()),
        Command::List => Output::Text(list_projects(catalog)),
        Command::About => Output::Text(ABOUT_TEXT.to_string()),
        Command::Contact => Output::Text(CONTACT_TEXT.to_string()),
        Command::Clear => Output::Clear,
        Command::Exit => Output::Exit,
        Command::Empty => Output::Text(String::new()),
        Command::Unknown(token) => Output::Text(not_found(token)),
    }
}

/// One `> {title} [{tech}]` line per project, in catalog order.
pub fn list_projects(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|p| format!("> {} [{}]", p.title, p.tech_csv()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn not_found(token: &str) -> String {
    format!("zsh: command not found: {}", token)
}
