use clap::Subcommand;

use crate::cli::subcommands::{LogCommands, SchemaCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Schema definitions stored in the registry.
    Schemas {
        #[command(subcommand)]
        action: SchemaCommands,
    },
    /// Log records validated against a schema.
    Logs {
        #[command(subcommand)]
        action: LogCommands,
    },
}
