//! Outbound request body.

use apiai_conversation::ContextCollection;
use apiai_core::SessionId;
use serde::Serialize;

/// JSON body posted to the query endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload<'a> {
    /// The user utterance.
    pub query: &'a str,
    /// Contexts carried over from previous turns.
    pub contexts: &'a ContextCollection,
    /// Session correlating the turns of one conversation.
    pub session_id: &'a SessionId,
    /// Language fixed when the client was built.
    pub lang: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiai_conversation::Context;
    use serde_json::json;

    #[test]
    fn serializes_wire_shape() {
        let contexts: ContextCollection =
            vec![Context::new("weather", 2).with_parameter("city", "Berlin")].into();
        let session_id = SessionId::from("foo-bar");
        let payload = RequestPayload {
            query: "Hello Gophers",
            contexts: &contexts,
            session_id: &session_id,
            lang: "en",
        };

        assert_eq!(
            serde_json::to_value(&payload).expect("serialize"),
            json!({
                "query": "Hello Gophers",
                "contexts": [{"name": "weather", "lifespan": 2, "parameters": {"city": "Berlin"}}],
                "sessionId": "foo-bar",
                "lang": "en",
            })
        );
    }

    #[test]
    fn empty_contexts_serialize_as_array() {
        let contexts = ContextCollection::new();
        let session_id = SessionId::from("s");
        let payload = RequestPayload {
            query: "",
            contexts: &contexts,
            session_id: &session_id,
            lang: "de",
        };
        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(value["contexts"], json!([]));
    }
}
