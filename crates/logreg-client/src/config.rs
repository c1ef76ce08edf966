//! Client configuration.
//!
//! Loaded figment-style: built-in defaults merged with `LOGREG_*`
//! environment variables (`LOGREG_BASE_URL`, `LOGREG_API_KEY`). There is no
//! config file; every invocation is stateless.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

fn default_base_url() -> String {
    "http://localhost:8081".to_string()
}

fn default_api_key() -> String {
    "secret-key".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the registry service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Static `X-Api-Key` header value. An empty string disables the header.
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from defaults and `LOGREG_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the merged sources cannot be
    /// extracted into a valid config.
    pub fn load() -> Result<Self, ClientError> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("LOGREG_"))
            .extract()
            .map_err(ClientError::from)
    }

    /// The API key to send, if any. Empty or whitespace-only keys count as
    /// auth disabled.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        let key = self.api_key.trim();
        (!key.is_empty()).then_some(key)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8081");
        assert_eq!(config.api_key(), Some("secret-key"));
    }

    #[test]
    fn empty_api_key_disables_auth() {
        let config = ClientConfig {
            api_key: String::new(),
            ..ClientConfig::default()
        };
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LOGREG_BASE_URL", "https://registry.internal:9000");
            jail.set_env("LOGREG_API_KEY", "");
            let config = ClientConfig::load().expect("config should load");
            assert_eq!(config.base_url, "https://registry.internal:9000");
            assert_eq!(config.api_key(), None);
            Ok(())
        });
    }
}
