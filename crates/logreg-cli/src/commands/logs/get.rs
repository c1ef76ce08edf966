use logreg_client::RegistryClient;

use crate::output;

pub async fn run(
    log_id: i64,
    full: bool,
    json: bool,
    expand: bool,
    client: &RegistryClient,
) -> anyhow::Result<()> {
    let log = client.get_log(log_id).await?;

    if json {
        println!("{}", output::json(&log)?);
        return Ok(());
    }

    println!("{}", output::log_detail(&log, full, expand));
    Ok(())
}
