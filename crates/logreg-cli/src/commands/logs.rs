use logreg_client::{LogQuery, RegistryClient};

use crate::cli::subcommands::LogCommands;

mod get;
mod list;

/// Handle `logreg logs`.
pub async fn handle(action: &LogCommands, client: &RegistryClient) -> anyhow::Result<()> {
    match action {
        LogCommands::List {
            schema_name,
            full,
            json,
            expand,
            limit,
            page,
            since,
            until,
        } => {
            let query = LogQuery {
                limit: *limit,
                page: *page,
                since: *since,
                until: *until,
            };
            list::run(schema_name.as_deref(), *full, *json, *expand, query, client).await
        }
        LogCommands::Get {
            log_id,
            full,
            json,
            expand,
        } => get::run(*log_id, *full, *json, *expand, client).await,
    }
}
