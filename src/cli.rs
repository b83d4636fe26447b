use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "predictive-analytics",
    version,
    about = "Prepare the pattern directory and report processing status"
)]
pub struct Cli {
    /// TOML file providing `data_dir`.
    #[arg(short = 'f', long = "config", global = true)]
    pub config: Option<Utf8PathBuf>,
    /// Directory used for pattern storage; overrides the config file.
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<Utf8PathBuf>,
    /// Emit machine-readable JSON instead of a summary line.
    #[arg(long = "json", global = true)]
    pub json: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    /// Produce a report (the default when no subcommand is given).
    Process,
    /// Print the processor readiness.
    Status,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
