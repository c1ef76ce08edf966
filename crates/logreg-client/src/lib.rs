//! # logreg-client
//!
//! HTTP client and domain models for the log-schema registry service.
//!
//! One [`RegistryClient`] is constructed per process and passed by reference
//! into every command handler, so tests can substitute responses at any
//! layer without global-state reset. Each operation issues exactly one
//! request with a fixed 30 s bound and no retry:
//! - `GET /schemas` (optional `name`/`version` filters)
//! - `GET /schemas/{id}`
//! - `GET /logs/schema/{name}` (`limit`, `page`, time window)
//! - `GET /logs/{id}`

mod config;
mod constraint;
mod error;
mod http;
mod model;

pub use config::ClientConfig;
pub use constraint::{Constraint, FieldDescriptor, field_descriptors};
pub use error::ClientError;
pub use model::{LogQuery, LogRecord, Schema};

use serde::de::DeserializeOwned;
use uuid::Uuid;

use model::{LogsResponse, SchemasResponse};

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// HTTP client for the registry service.
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl RegistryClient {
    /// Create a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client
    /// cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("logreg/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key().map(str::to_string),
        })
    }

    /// Issue a single GET request against the service.
    ///
    /// # Errors
    ///
    /// [`ClientError::Transport`] when the request cannot complete,
    /// [`ClientError::Status`] on a non-2xx response. Either failure is
    /// logged before it propagates.
    pub async fn get(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<reqwest::Response, ClientError> {
        let mut request = self.http.get(format!("{}{path}", self.base_url));
        if !params.is_empty() {
            request = request.query(params);
        }
        self.send(request).await
    }

    /// Issue a single POST request against the service.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RegistryClient::get`].
    pub async fn post(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<reqwest::Response, ClientError> {
        let mut request = self.http.post(format!("{}{path}", self.base_url));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request).await
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let request = match &self.api_key {
            Some(key) => request.header("X-Api-Key", key),
            None => request,
        };
        let resp = request.send().await.map_err(|error| {
            tracing::error!(%error, "request failed");
            ClientError::Transport(error)
        })?;
        http::check_response(resp).await
    }

    /// List schemas, optionally filtered by name and version.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the service returns a
    /// non-success status, or the envelope cannot be decoded.
    pub async fn list_schemas(
        &self,
        name: Option<&str>,
        version: Option<&str>,
    ) -> Result<Vec<Schema>, ClientError> {
        let mut params = Vec::new();
        if let Some(name) = name {
            params.push(("name", name.to_string()));
        }
        if let Some(version) = version {
            params.push(("version", version.to_string()));
        }
        let resp = self.get("/schemas", &params).await?;
        let envelope: SchemasResponse = decode(resp).await?;
        Ok(envelope.schemas)
    }

    /// Fetch one schema revision by id.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RegistryClient::list_schemas`].
    pub async fn get_schema(&self, id: Uuid) -> Result<Schema, ClientError> {
        let resp = self.get(&format!("/schemas/{id}"), &[]).await?;
        decode(resp).await
    }

    /// List stored logs for a schema name. Ordering and the limit guarantee
    /// are the service's contract; the client never re-sorts or re-limits.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RegistryClient::list_schemas`].
    pub async fn list_logs(
        &self,
        schema_name: &str,
        query: &LogQuery,
    ) -> Result<Vec<LogRecord>, ClientError> {
        let path = format!("/logs/schema/{}", urlencoding::encode(schema_name));
        let resp = self.get(&path, &query.to_params()).await?;
        let envelope: LogsResponse = decode(resp).await?;
        Ok(envelope.logs)
    }

    /// Fetch one log record by id.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RegistryClient::list_schemas`].
    pub async fn get_log(&self, id: i64) -> Result<LogRecord, ClientError> {
        let resp = self.get(&format!("/logs/{id}"), &[]).await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}
