//! Reference project data shipped with the binary.

use super::{ProjectLinks, ProjectRecord};

fn record(
    id: &str,
    title: &str,
    tech: &[&str],
    description: &str,
    repository: &str,
    demo: &str,
    accent_color: &str,
) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        description: description.to_string(),
        links: ProjectLinks {
            repository: repository.to_string(),
            demo: demo.to_string(),
        },
        accent_color: accent_color.to_string(),
    }
}

/// The four projects featured on the portfolio page, in display order.
pub fn builtin_records() -> Vec<ProjectRecord> {
    vec![
        record(
            "01",
            "Kitsu URL Shortener",
            &["Spring Boot", "React", "Tailwind"],
            "A fast, production-ready URL shortener featuring secure code generation, \
             collision handling, and real-time click tracking. The sleek interface offers \
             a drifting blob background, smooth logo animations, and local history storage \
             for a seamless user experience.",
            "https://github.com/ShubhmDalvi/kitsu-backend",
            "https://kitsu-url.vercel.app",
            "#4ade80",
        ),
        record(
            "02",
            "grb (Grab) CLI",
            &["GoLang", "CLI", "TUI"],
            "A high-performance, terminal-based clipboard manager for Windows built in Go. \
             Features an interactive TUI with fuzzy search, a background daemon for \
             auto-capturing history, and robust tools to tag, pin, and alias frequently \
             used snippets.",
            "https://github.com/ShubhmDalvi/grb",
            "https://grbapp.netlify.app",
            "#60a5fa",
        ),
        record(
            "03",
            "QShare Network Transfer",
            &["GoLang", "Networking", "CLI"],
            "A minimal, secure command-line tool for high-speed LAN file transfers. \
             Eliminates manual IP entry with UDP broadcast discovery, utilizing AES-CTR \
             encryption and TCP for reliable, visualized data transmission.",
            "https://github.com/ShubhmDalvi/qshare",
            "https://qsharetool.netlify.app",
            "#f472b6",
        ),
        record(
            "04",
            "TubeTune Quality Auto-Set",
            &["JavaScript", "Chrome Ext", "DOM"],
            "A lightweight Chrome extension that automates video quality settings for \
             YouTube and YouTube Music. Utilizes injected content scripts and player API \
             event listeners to enforce user preferences (e.g., 1080p) instantly upon \
             video load.",
            "https://github.com/ShubhmDalvi/TubeTune",
            "https://tubetune.netlify.app",
            "#a78bfa",
        ),
    ]
}
