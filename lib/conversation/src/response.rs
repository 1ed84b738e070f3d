//! Decoded query responses.
//!
//! Every field decodes to its zero value when absent or `null`, so a
//! syntactically valid but sparse body still decodes.

use crate::context::ContextCollection;
use crate::message::MessageCollection;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Response {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub id: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub session_id: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub lang: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub result: QueryResult,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub status: Status,
}

/// The result of a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryResult {
    /// The utterance as understood by the service.
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub resolved_query: String,
    /// Action name of the matched intent.
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub action: String,
    /// Matching confidence, 0.0 to 1.0.
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub score: f64,
    /// Contexts after this turn. Callers adopt these for the next request.
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub contexts: ContextCollection,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub fulfillment: Fulfillment,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub metadata: Metadata,
}

/// Speech and rich messages to present to the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fulfillment {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub speech: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub messages: MessageCollection,
}

/// Intent and webhook metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub intent_id: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub intent_name: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub webhook_for_slot_filling_used: String,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub webhook_used: String,
    /// Webhook response time in milliseconds.
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub webhook_response_time: i64,
}

impl Metadata {
    /// Webhook response time as a duration. Negative values clamp to zero.
    #[must_use]
    pub fn response_time(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.webhook_response_time).unwrap_or(0))
    }
}

/// Status block reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Status {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub code: i64,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub error_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::message::MessageType;
    use serde_json::json;

    #[test]
    fn metadata_response_time() {
        let cases = [
            (1000, Duration::from_secs(1)),
            (0, Duration::ZERO),
            (250, Duration::from_millis(250)),
            (-5, Duration::ZERO),
        ];
        for (value, expected) in cases {
            let metadata = Metadata {
                webhook_response_time: value,
                ..Default::default()
            };
            assert_eq!(metadata.response_time(), expected, "value {value}");
        }
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let response: Response = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(response, Response::default());
        assert!(response.result.contexts.is_empty());
    }

    #[test]
    fn null_fields_decode_to_defaults() {
        let response: Response = serde_json::from_str(
            r#"{"id": null, "result": {"contexts": null, "score": null,
                "fulfillment": {"speech": null, "messages": null},
                "metadata": {"intentName": null, "webhookResponseTime": null}},
                "status": null}"#,
        )
        .expect("deserialize");
        assert_eq!(response, Response::default());
    }

    #[test]
    fn null_messages_keep_speech() {
        let response: Response =
            serde_json::from_str(r#"{"result":{"fulfillment":{"speech":"hi","messages":null}}}"#)
                .expect("deserialize");
        assert_eq!(response.result.fulfillment.speech, "hi");
        assert!(response.result.fulfillment.messages.is_empty());
    }

    #[test]
    fn context_without_name_decodes() {
        let response: Response =
            serde_json::from_str(r#"{"result":{"contexts":[{"lifespan":2}]}}"#)
                .expect("deserialize");
        assert_eq!(
            response.result.contexts,
            ContextCollection::from(vec![Context::new("", 2)])
        );
    }

    #[test]
    fn decodes_full_response() {
        let response: Response = serde_json::from_value(json!({
            "id": "b340a1f7",
            "sessionId": "foo-bar",
            "lang": "en",
            "result": {
                "resolvedQuery": "weather in berlin",
                "action": "weather.get",
                "score": 0.92,
                "contexts": [
                    {"name": "weather", "lifespan": 4, "parameters": {"city": "Berlin"}}
                ],
                "fulfillment": {
                    "speech": "It is sunny.",
                    "messages": [
                        {"type": 0, "speech": "It is sunny."},
                        {"type": 2, "platform": "telegram", "replies": ["Tomorrow?"]}
                    ]
                },
                "metadata": {
                    "intentId": "7c2e",
                    "intentName": "weather",
                    "webhookUsed": "true",
                    "webhookForSlotFillingUsed": "false",
                    "webhookResponseTime": 1000
                }
            },
            "status": {"code": 200, "errorType": "success"}
        }))
        .expect("deserialize");

        let result = &response.result;
        assert_eq!(response.session_id, "foo-bar");
        assert_eq!(result.action, "weather.get");
        assert_eq!(
            result.contexts.get("weather"),
            Some(&Context::new("weather", 4).with_parameter("city", "Berlin"))
        );
        assert_eq!(result.fulfillment.speech, "It is sunny.");
        assert_eq!(result.fulfillment.messages.len(), 2);
        let mut slack = result.fulfillment.messages.clone();
        slack.select_for_platform("slack");
        assert_eq!(slack.len(), 1);
        assert_eq!(
            slack.iter().next().map(|msg| msg.message_type),
            Some(MessageType::Text)
        );
        assert_eq!(result.metadata.intent_name, "weather");
        assert_eq!(result.metadata.response_time(), Duration::from_secs(1));
        assert_eq!(response.status.code, 200);
    }
}
