//! Error types for the client crate.
//!
//! Every failure is terminal for the request that produced it. Callers
//! match on the variant via `Report::current_context` and own any retry
//! policy.

use std::fmt;

/// Errors from configuring the client or performing a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The client configuration is unusable.
    InvalidConfig { reason: String },
    /// The request payload could not be encoded. Nothing was sent.
    Serialization { details: String },
    /// The network call could not be completed.
    Transport { details: String },
    /// The service answered with a status of 400 or above.
    RemoteStatus { status: u16, text: String },
    /// The response body was not valid JSON for a query response.
    Decode { details: String },
}

impl ClientError {
    /// Returns the HTTP status for remote status errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => {
                write!(f, "invalid client configuration: {reason}")
            }
            Self::Serialization { details } => {
                write!(f, "failed to encode request payload: {details}")
            }
            Self::Transport { details } => {
                write!(f, "request to api.ai failed: {details}")
            }
            Self::RemoteStatus { status, text } => {
                write!(f, "api.ai returned {status} {text}")
            }
            Self::Decode { details } => {
                write!(f, "failed to decode api.ai response: {details}")
            }
        }
    }
}

impl std::error::Error for ClientError {}
