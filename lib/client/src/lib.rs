//! Client for the api.ai natural-language query endpoint.
//!
//! This crate provides:
//!
//! - **Configuration**: Token, language and endpoint fixed per client
//! - **Requester**: One query is one authenticated round trip
//! - **Errors**: Serialization, transport, remote status and decode failures
//!
//! Retries, backoff and persistence of contexts between turns are left to
//! the caller.

pub mod client;
pub mod config;
pub mod error;
pub mod payload;

pub use client::{ApiAiClient, Requester};
pub use config::ClientConfig;
pub use error::ClientError;
pub use payload::RequestPayload;
