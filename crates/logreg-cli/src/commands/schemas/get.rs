use anyhow::bail;
use logreg_client::{RegistryClient, Schema};
use uuid::Uuid;

use crate::output;

pub async fn run(
    id: Option<&Uuid>,
    name: Option<&str>,
    version: Option<&str>,
    json: bool,
    client: &RegistryClient,
) -> anyhow::Result<()> {
    // Selector validation happens before any network call.
    let selector = Selector::from_flags(id, name, version)?;

    let schema = match selector {
        Selector::ById {
            id,
            version_ignored,
        } => {
            if version_ignored {
                tracing::warn!("--version is ignored when using --id");
            }
            client.get_schema(id).await?
        }
        Selector::ByName { name, version } => {
            let matches = client.list_schemas(Some(&name), version.as_deref()).await?;
            let (schema, count) = select_match(matches, &name, version.as_deref())?;
            if count > 1 {
                tracing::warn!(count, "multiple schemas matched; displaying the first");
            }
            schema
        }
    };

    if json {
        println!("{}", output::json(&schema)?);
        return Ok(());
    }

    println!("{}", output::schema_detail(&schema));
    Ok(())
}

/// How a `schemas get` invocation identifies its target. By-id and by-name
/// are mutually exclusive by construction.
#[derive(Debug, PartialEq, Eq)]
enum Selector {
    ById { id: Uuid, version_ignored: bool },
    ByName {
        name: String,
        version: Option<String>,
    },
}

impl Selector {
    fn from_flags(
        id: Option<&Uuid>,
        name: Option<&str>,
        version: Option<&str>,
    ) -> anyhow::Result<Self> {
        match (id, name) {
            (Some(_), Some(_)) => bail!("cannot specify both --id and --name"),
            (Some(id), None) => Ok(Self::ById {
                id: *id,
                version_ignored: version.is_some(),
            }),
            (None, Some(name)) => Ok(Self::ByName {
                name: name.to_string(),
                version: version.map(str::to_string),
            }),
            (None, None) => bail!("must specify either --id or --name"),
        }
    }
}

/// Pick a schema from a name-lookup result. Empty is an error naming the
/// query; multiple matches deterministically select the first in server
/// order and report the count so the caller can warn.
fn select_match(
    matches: Vec<Schema>,
    name: &str,
    version: Option<&str>,
) -> anyhow::Result<(Schema, usize)> {
    let count = matches.len();
    let Some(first) = matches.into_iter().next() else {
        match version {
            Some(version) => bail!("no schema found with name '{name}' and version '{version}'"),
            None => bail!("no schema found with name '{name}'"),
        }
    };
    Ok((first, count))
}
