//! Client configuration.
//!
//! The token and language are required; endpoint and protocol version
//! default to the public v1 query API. Configuration is immutable once a
//! client is built.

use crate::error::ClientError;
use apiai_core::Result;
use reqwest::Url;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Default query endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.api.ai/v1/query";

/// Default protocol version sent as the `v` query parameter.
pub const DEFAULT_VERSION: &str = "20150910";

/// Configuration for an [`ApiAiClient`](crate::ApiAiClient).
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    /// Access token sent as a bearer credential.
    token: String,
    /// Language tag sent with every query (e.g. "en", "de").
    lang: String,
    /// Query endpoint URL.
    #[serde(default = "default_endpoint")]
    endpoint: String,
    /// Protocol version.
    #[serde(default = "default_version")]
    version: String,
    /// Transport deadline in milliseconds. No deadline when absent.
    #[serde(default)]
    timeout_ms: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl ClientConfig {
    /// Creates a configuration with defaults for optional fields.
    #[must_use]
    pub fn new(token: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            lang: lang.into(),
            endpoint: default_endpoint(),
            version: default_version(),
            timeout_ms: None,
        }
    }

    /// Overrides the query endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Overrides the protocol version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets a transport deadline. Sub-millisecond remainders round up.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Checks the configuration and builds the request URL, including the
    /// `v` query parameter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the token is empty or the endpoint is not
    /// an absolute http(s) URL.
    pub fn request_url(&self) -> Result<Url, ClientError> {
        if self.token.is_empty() {
            return Err(ClientError::InvalidConfig {
                reason: "access token is empty".to_string(),
            }
            .into());
        }

        let mut url = Url::parse(&self.endpoint).map_err(|e| ClientError::InvalidConfig {
            reason: format!("endpoint '{}': {e}", self.endpoint),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidConfig {
                reason: format!("endpoint '{}' is not an http(s) URL", self.endpoint),
            }
            .into());
        }

        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "v")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair("v", &self.version);

        Ok(url)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("lang", &self.lang)
            .field("endpoint", &self.endpoint)
            .field("version", &self.version)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_public_defaults() {
        let config = ClientConfig::new("secret", "en");
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.version(), DEFAULT_VERSION);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn request_url_pins_version() {
        let url = ClientConfig::new("secret", "en")
            .request_url()
            .expect("valid config");
        assert_eq!(url.as_str(), "https://api.api.ai/v1/query?v=20150910");
    }

    #[test]
    fn request_url_replaces_existing_version() {
        let url = ClientConfig::new("secret", "en")
            .with_endpoint("http://localhost:8080/query?v=old&debug=1")
            .with_version("testversion")
            .request_url()
            .expect("valid config");
        assert_eq!(url.as_str(), "http://localhost:8080/query?debug=1&v=testversion");
    }

    #[test]
    fn empty_token_is_rejected() {
        let err = ClientConfig::new("", "en")
            .request_url()
            .expect_err("empty token");
        assert!(matches!(
            err.current_context(),
            ClientError::InvalidConfig { .. }
        ));
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let err = ClientConfig::new("secret", "en")
            .with_endpoint("/v1/query")
            .request_url()
            .expect_err("relative endpoint");
        assert!(matches!(
            err.current_context(),
            ClientError::InvalidConfig { .. }
        ));
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let result = ClientConfig::new("secret", "en")
            .with_endpoint("ftp://example.com/query")
            .request_url();
        assert!(result.is_err());
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"token": "secret", "lang": "de", "timeout_ms": 5000}"#)
                .expect("deserialize");
        assert_eq!(config.lang(), "de");
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn debug_redacts_token() {
        let rendered = format!("{:?}", ClientConfig::new("secret", "en"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn sub_second_timeout_is_kept() {
        let config = ClientConfig::new("secret", "en").with_timeout(Duration::from_millis(500));
        assert_eq!(config.timeout(), Some(Duration::from_millis(500)));

        let config = ClientConfig::new("secret", "en").with_timeout(Duration::from_micros(10));
        assert_eq!(config.timeout(), Some(Duration::from_millis(1)));
    }
}
