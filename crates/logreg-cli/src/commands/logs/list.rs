use anyhow::bail;
use logreg_client::{LogQuery, RegistryClient};

use crate::output;

pub async fn run(
    schema_name: Option<&str>,
    full: bool,
    json: bool,
    expand: bool,
    query: LogQuery,
    client: &RegistryClient,
) -> anyhow::Result<()> {
    let Some(schema_name) = schema_name else {
        bail!("schema name is required");
    };

    let logs = client.list_logs(schema_name, &query).await?;

    if logs.is_empty() {
        println!("{}", output::no_logs_message(schema_name));
        return Ok(());
    }

    if json {
        println!("{}", output::json(&logs)?);
        return Ok(());
    }

    println!("{}", output::log_list_table(schema_name, &logs, full, expand));
    Ok(())
}
