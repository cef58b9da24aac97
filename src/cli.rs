//! Command-line interface definitions
//!
//! Lives in the library so the xtask can render the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Folio - boot-sequence terminal for browsing a developer portfolio
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
#[command(after_help = "Run without a subcommand to open the interactive terminal.")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filter with FOLIO_LOG, default "info")
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Project catalog selection shared by several subcommands.
#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArg {
    /// Project catalog file (.toml or .json) instead of the builtin projects
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

/// Options for the interactive terminal.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub catalog: CatalogArg,

    /// Seed for the boot animation delays
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Skip the boot animation delays
    #[arg(long)]
    pub instant: bool,

    /// Color theme (classic, ocean, matrix)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive terminal
    Run(RunArgs),

    /// Run terminal commands without the interactive window
    #[command(long_about = "Run terminal commands without the interactive window.\n\n\
        Each LINE is submitted to a freshly booted session in order and the \
        resulting transcript is printed. Processing stops at 'exit'.")]
    Exec {
        #[command(flatten)]
        catalog: CatalogArg,

        /// Command lines to submit (e.g. "ls" "about")
        #[arg(required = true, value_name = "LINE")]
        lines: Vec<String>,
    },

    /// Show project details from the catalog
    Projects {
        #[command(flatten)]
        catalog: CatalogArg,

        /// Only show the project with this id
        #[arg(value_name = "ID")]
        id: Option<String>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write the default configuration if no config file exists
    Init,
}
