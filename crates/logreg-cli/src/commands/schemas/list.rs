use logreg_client::RegistryClient;

use crate::output;

pub async fn run(full: bool, json: bool, client: &RegistryClient) -> anyhow::Result<()> {
    let schemas = client.list_schemas(None, None).await?;

    if schemas.is_empty() {
        println!("{}", output::NO_SCHEMAS_MESSAGE);
        return Ok(());
    }

    if json {
        println!("{}", output::json(&schemas)?);
        return Ok(());
    }

    println!("{}", output::schema_list_table(&schemas, full));
    Ok(())
}
