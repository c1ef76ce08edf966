use clap::Parser;

pub mod root_commands;
pub mod subcommands;

pub use root_commands::Commands;

/// Top-level CLI parser for the `logreg` binary.
#[derive(Debug, Parser)]
#[command(
    name = "logreg",
    version,
    about = "Command-line client for the log-schema registry"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(long, global = true)]
    pub verbose: bool,
}
