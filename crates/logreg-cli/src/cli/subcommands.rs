use chrono::{DateTime, Utc};
use clap::Subcommand;
use uuid::Uuid;

/// `logreg schemas` subcommands.
#[derive(Clone, Debug, Subcommand)]
pub enum SchemaCommands {
    /// List all registered schemas.
    List {
        /// Show full UUIDs
        #[arg(short, long)]
        full: bool,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Fetch one schema by id, or by name and optional version.
    Get {
        /// Schema UUID
        #[arg(long)]
        id: Option<Uuid>,
        /// Schema name
        #[arg(short, long)]
        name: Option<String>,
        /// Schema version (defaults to latest)
        #[arg(short, long)]
        version: Option<String>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

/// `logreg logs` subcommands.
#[derive(Clone, Debug, Subcommand)]
pub enum LogCommands {
    /// List recent logs for a schema.
    List {
        /// Schema name to filter logs
        schema_name: Option<String>,
        /// Show full UUIDs
        #[arg(short, long)]
        full: bool,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
        /// Show full log data (pretty-printed)
        #[arg(short, long)]
        expand: bool,
        /// Maximum number of logs to retrieve
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
        /// Result page (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Only logs created at or after this RFC 3339 timestamp
        #[arg(long)]
        since: Option<DateTime<Utc>>,
        /// Only logs created before this RFC 3339 timestamp
        #[arg(long)]
        until: Option<DateTime<Utc>>,
    },
    /// Fetch one log record by id.
    Get {
        /// Log id
        log_id: i64,
        /// Show full UUIDs
        #[arg(short, long)]
        full: bool,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
        /// Show full log data (pretty-printed)
        #[arg(short, long)]
        expand: bool,
    },
}
