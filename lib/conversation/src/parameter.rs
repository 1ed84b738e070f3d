//! Context parameter values.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as JsonValue};
use std::collections::BTreeMap;

/// A JSON-compatible value stored under a context parameter key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Explicit `null`.
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Integer or floating point number.
    Number(Number),
    /// String value.
    String(String),
    /// Ordered list of values.
    Array(Vec<ParameterValue>),
    /// Nested key/value mapping.
    Object(BTreeMap<String, ParameterValue>),
}

impl ParameterValue {
    /// Returns the string value, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns true if this is `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for ParameterValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<JsonValue> for ParameterValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => Self::Number(n),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<ParameterValue> for JsonValue {
    fn from(value: ParameterValue) -> Self {
        match value {
            ParameterValue::Null => JsonValue::Null,
            ParameterValue::Bool(b) => JsonValue::Bool(b),
            ParameterValue::Number(n) => JsonValue::Number(n),
            ParameterValue::String(s) => JsonValue::String(s),
            ParameterValue::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            ParameterValue::Object(map) => {
                JsonValue::Object(map.into_iter().map(|(k, v)| (k, JsonValue::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_every_json_kind() {
        let value: ParameterValue = serde_json::from_value(json!({
            "name": "Berlin",
            "count": 1337,
            "ratio": 0.5,
            "flag": false,
            "missing": null,
            "tags": ["a", 1],
        }))
        .expect("deserialize");

        let ParameterValue::Object(map) = value else {
            panic!("expected object");
        };
        assert_eq!(map["name"].as_str(), Some("Berlin"));
        assert_eq!(map["count"], ParameterValue::from(1337_i64));
        assert!(matches!(map["ratio"], ParameterValue::Number(_)));
        assert_eq!(map["flag"].as_bool(), Some(false));
        assert!(map["missing"].is_null());
        assert_eq!(
            map["tags"],
            ParameterValue::Array(vec!["a".into(), 1_i64.into()])
        );
    }

    #[test]
    fn converts_to_and_from_json_value() {
        let original = json!({"nested": {"list": [true, null, "x"]}});
        let value = ParameterValue::from(original.clone());
        assert_eq!(JsonValue::from(value), original);
    }
}
