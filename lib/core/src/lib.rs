//! Core types and utilities shared by the api.ai client crates.
//!
//! This crate provides the error handling foundation and the session
//! identifier used to correlate conversation turns.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::SessionId;
