//! Sends one utterance to api.ai and prints the fulfillment.
//!
//! Usage: `apiai-query <utterance...>`. The response contexts are printed as
//! JSON so they can be fed back through `APIAI__CONTEXTS` on the next turn.

mod config;

use apiai_client::{ApiAiClient, Requester};
use apiai_conversation::ContextCollection;
use apiai_core::SessionId;
use crate::config::QueryConfig;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let utterance = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if utterance.is_empty() {
        eprintln!("usage: apiai-query <utterance...>");
        return ExitCode::FAILURE;
    }

    let config = match QueryConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "Loaded configuration");

    let contexts: ContextCollection = match config.contexts.as_deref() {
        Some(raw) => match serde_json::from_str(raw) {
            Ok(contexts) => contexts,
            Err(e) => {
                tracing::error!(error = %e, "Failed to parse contexts");
                return ExitCode::FAILURE;
            }
        },
        None => ContextCollection::new(),
    };
    let session_id = config
        .session_id
        .clone()
        .map(SessionId::from)
        .unwrap_or_default();

    let client = match ApiAiClient::with_config(config.client) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create client");
            return ExitCode::FAILURE;
        }
    };

    let response = match client.request(&utterance, &session_id, &contexts).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, session_id = %session_id, "Query failed");
            return ExitCode::FAILURE;
        }
    };

    let result = response.result;
    let mut messages = result.fulfillment.messages;
    if let Some(platform) = config.platform.as_deref() {
        messages.select_for_platform(platform);
    }

    println!("session: {session_id}");
    println!("speech: {}", result.fulfillment.speech);
    for message in &messages {
        if !message.speech.is_empty() {
            println!("message: {}", message.speech);
        }
        for reply in &message.replies {
            println!("reply: {reply}");
        }
    }
    match serde_json::to_string(&result.contexts) {
        Ok(json) => println!("contexts: {json}"),
        Err(e) => tracing::warn!(error = %e, "Failed to encode contexts"),
    }

    ExitCode::SUCCESS
}
