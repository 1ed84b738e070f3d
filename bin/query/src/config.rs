//! Query tool configuration.
//!
//! Loaded via the `config` crate from `APIAI__*` environment variables,
//! e.g. `APIAI__CLIENT__TOKEN`, `APIAI__CLIENT__LANG`, `APIAI__PLATFORM`.

use apiai_client::ClientConfig;
use serde::Deserialize;

/// Configuration composed from the client config and tool options.
#[derive(Debug, Deserialize)]
pub struct QueryConfig {
    /// api.ai client configuration.
    pub client: ClientConfig,

    /// Only print messages for this platform (plus platform-agnostic ones).
    #[serde(default)]
    pub platform: Option<String>,

    /// Session to continue. A new one is generated when absent.
    #[serde(default)]
    pub session_id: Option<String>,

    /// Contexts from the previous turn, as a JSON array.
    #[serde(default)]
    pub contexts: Option<String>,
}

impl QueryConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("APIAI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
