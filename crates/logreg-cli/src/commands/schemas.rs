use logreg_client::RegistryClient;

use crate::cli::subcommands::SchemaCommands;

mod get;
mod list;

/// Handle `logreg schemas`.
pub async fn handle(action: &SchemaCommands, client: &RegistryClient) -> anyhow::Result<()> {
    match action {
        SchemaCommands::List { full, json } => list::run(*full, *json, client).await,
        SchemaCommands::Get {
            id,
            name,
            version,
            json,
        } => get::run(id.as_ref(), name.as_deref(), version.as_deref(), *json, client).await,
    }
}
