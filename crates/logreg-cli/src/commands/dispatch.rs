use logreg_client::RegistryClient;

use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
///
/// This is the single point of termination: every layer below returns
/// failures instead of exiting, so tests can intercept any of them without a
/// live process.
pub async fn dispatch(command: Commands, client: &RegistryClient) -> anyhow::Result<()> {
    match command {
        Commands::Schemas { action } => commands::schemas::handle(&action, client).await,
        Commands::Logs { action } => commands::logs::handle(&action, client).await,
    }
}
