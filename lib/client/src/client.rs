//! Query transport.
//!
//! Each call to [`Requester::request`] issues exactly one authenticated POST
//! and either decodes the response or surfaces the failure. The client holds
//! only immutable configuration, so one instance can serve concurrent
//! callers.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::payload::RequestPayload;
use apiai_conversation::{ContextCollection, Response};
use apiai_core::{Result, SessionId};
use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, warn};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Sends utterances to the query endpoint.
#[async_trait]
pub trait Requester: Send + Sync {
    /// Sends `query` for `session_id` along with the current `contexts`.
    ///
    /// # Errors
    ///
    /// Returns `Serialization`, `Transport`, `RemoteStatus` or `Decode`
    /// depending on where the round trip failed. No partial response is
    /// returned with an error.
    async fn request(
        &self,
        query: &str,
        session_id: &SessionId,
        contexts: &ContextCollection,
    ) -> Result<Response, ClientError>;
}

/// HTTP implementation of [`Requester`].
#[derive(Debug, Clone)]
pub struct ApiAiClient {
    config: ClientConfig,
    url: Url,
    http: reqwest::Client,
}

impl ApiAiClient {
    /// Creates a client for the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the token is empty.
    pub fn new(token: impl Into<String>, lang: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::new(token, lang))
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration is rejected or the HTTP
    /// client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        let url = config.request_url()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| ClientError::InvalidConfig {
            reason: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self { config, url, http })
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Requester for ApiAiClient {
    #[instrument(
        skip(self, query, contexts),
        fields(session_id = %session_id, lang = %self.config.lang(), contexts = contexts.len())
    )]
    async fn request(
        &self,
        query: &str,
        session_id: &SessionId,
        contexts: &ContextCollection,
    ) -> Result<Response, ClientError> {
        let payload = RequestPayload {
            query,
            contexts,
            session_id,
            lang: self.config.lang(),
        };
        let body = serde_json::to_vec(&payload).map_err(|e| {
            warn!(error = %e, "failed to encode request payload");
            ClientError::Serialization {
                details: e.to_string(),
            }
        })?;

        let response = self
            .http
            .post(self.url.clone())
            .bearer_auth(self.config.token())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "query request failed");
                ClientError::Transport {
                    details: e.to_string(),
                }
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            warn!(status = %status, "api.ai returned error status");
            return Err(ClientError::RemoteStatus {
                status: status.as_u16(),
                text: status.canonical_reason().unwrap_or_default().to_string(),
            }
            .into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            warn!(error = %e, "failed to read response body");
            ClientError::Transport {
                details: e.to_string(),
            }
        })?;
        let decoded = serde_json::from_slice::<Option<Response>>(&bytes)
            .map_err(|e| {
                warn!(error = %e, "failed to decode response body");
                ClientError::Decode {
                    details: e.to_string(),
                }
            })?
            .unwrap_or_default();

        debug!(
            status = status.as_u16(),
            intent = %decoded.result.metadata.intent_name,
            contexts = decoded.result.contexts.len(),
            "query completed"
        );
        Ok(decoded)
    }
}
