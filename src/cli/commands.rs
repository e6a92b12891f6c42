use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "br",
    about = concat!("bufring v", env!("CARGO_PKG_VERSION"), " - recently used documents, in a ring"),
    version,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Session file to open in the TUI
    pub session: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./bufring.toml if present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the sidebar rows for a session
    Render(ReplayArgs),
    /// Print the MRU order and current document
    Mru(ReplayArgs),
    /// Show which documents are tracked and why others are not
    Check(CheckArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Session file (TOML)
    pub session: PathBuf,
    /// Events to apply first, e.g. "focus:3, next, close:2"
    #[arg(short = 'e', long)]
    pub events: Option<String>,
    /// Read events from a file (one per line)
    #[arg(long = "events-file", conflicts_with = "events")]
    pub events_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Session file (TOML)
    pub session: PathBuf,
}
