//! Fulfillment messages.

use crate::parameter::ParameterValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The kind of a fulfillment message, carried as an integer on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum MessageType {
    /// Plain text response.
    #[default]
    Text,
    /// Card with title, subtitle, image and buttons.
    Card,
    /// Quick reply suggestions.
    QuickReplies,
    /// Image.
    Image,
    /// Arbitrary platform payload.
    CustomPayload,
    /// A type this client does not know about.
    Unknown(i64),
}

impl From<i64> for MessageType {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Text,
            1 => Self::Card,
            2 => Self::QuickReplies,
            3 => Self::Image,
            4 => Self::CustomPayload,
            other => Self::Unknown(other),
        }
    }
}

impl From<MessageType> for i64 {
    fn from(value: MessageType) -> Self {
        match value {
            MessageType::Text => 0,
            MessageType::Card => 1,
            MessageType::QuickReplies => 2,
            MessageType::Image => 3,
            MessageType::CustomPayload => 4,
            MessageType::Unknown(other) => other,
        }
    }
}

/// A button attached to a card message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Button label.
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub text: String,
    /// Text or URL sent back when the button is pressed.
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub postback: String,
}

/// One fragment of a fulfillment response.
///
/// An empty `platform` means the message applies to every platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Kind of message, which decides the fields that are set.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "crate::nullable::or_default"
    )]
    pub message_type: MessageType,
    /// Target platform, empty for all platforms.
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub platform: String,
    /// Text to show or speak.
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub speech: String,
    /// Image for card and image messages.
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub image_url: String,
    /// Card title.
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub title: String,
    /// Card subtitle.
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub subtitle: String,
    /// Card buttons.
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub buttons: Vec<Button>,
    /// Quick reply suggestions.
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub replies: Vec<String>,
    /// Platform-specific payload for custom payload messages.
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub payload: BTreeMap<String, ParameterValue>,
}

impl Message {
    /// Creates a platform-agnostic text message.
    #[must_use]
    pub fn text(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            ..Default::default()
        }
    }

    /// Restricts the message to a platform.
    #[must_use]
    pub fn for_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Returns true if the message should be shown on `platform`.
    #[must_use]
    pub fn applies_to(&self, platform: &str) -> bool {
        self.platform.is_empty() || self.platform == platform
    }
}

/// Ordered collection of fulfillment messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCollection(Vec<Message>);

impl MessageCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the collection holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates messages in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }

    /// Keeps only messages for `platform` or for all platforms, in order.
    pub fn select_for_platform(&mut self, platform: &str) {
        self.0.retain(|msg| msg.applies_to(platform));
    }

    /// Consumes the collection, returning the messages in order.
    #[must_use]
    pub fn into_inner(self) -> Vec<Message> {
        self.0
    }
}

impl From<Vec<Message>> for MessageCollection {
    fn from(messages: Vec<Message>) -> Self {
        Self(messages)
    }
}

impl FromIterator<Message> for MessageCollection {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MessageCollection {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MessageCollection {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
