//! Conversation state for api.ai queries.
//!
//! This crate provides:
//!
//! - **Contexts**: Named, parameterized dialog state carried between turns
//! - **Messages**: Fulfillment fragments and per-platform projection
//! - **Response**: The decoded query response envelope
//!
//! Nothing here performs I/O. Callers own persistence of contexts between
//! turns and hand them to the transport on each request.

pub mod context;
pub mod message;
mod nullable;
pub mod parameter;
pub mod response;

pub use context::{Context, ContextCollection, GENERIC_CONTEXT_NAME, Parameters};
pub use message::{Button, Message, MessageCollection, MessageType};
pub use parameter::ParameterValue;
pub use response::{Fulfillment, Metadata, QueryResult, Response, Status};
