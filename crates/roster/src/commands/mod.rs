pub mod format;
pub mod list;

use clap::Subcommand;
use roster_core::{RecordFormatter, RosterConfig};

#[derive(Subcommand)]
pub enum Commands {
    /// List records one formatted row each
    List(list::ListArgs),
    /// Format a single JSON object
    Format(format::FormatArgs),
}

impl Commands {
    pub fn run(self, config: &RosterConfig) -> anyhow::Result<()> {
        match self {
            Commands::List(args) => list::run(args, config),
            Commands::Format(args) => format::run(args, config),
        }
    }
}

/// A `--separator` flag wins over the configured one.
pub fn select_formatter(separator: Option<String>, config: &RosterConfig) -> RecordFormatter {
    match separator {
        Some(sep) => config.formatter().with_separator(sep),
        None => config.formatter(),
    }
}
