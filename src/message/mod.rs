//! Chat message shapes consumed from the host environment
//!
//! The host hands messages over as JSON: content is either a plain string or an
//! ordered list of heterogeneous parts, only some of which carry text. Modeling
//! both levels as tagged unions makes "skip parts without a text value" an
//! exhaustive match instead of a runtime field probe.

use serde::{Deserialize, Serialize};

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role
    #[serde(default)]
    pub role: Role,

    /// Message content: plain text or an ordered part list
    pub content: MessageContent,
}

/// Message roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    #[default]
    User,
    Assistant,
    Tool,
}

/// Message content variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// A single content part within a part-list message
///
/// Parts the library does not recognise deserialize into [`ContentPart::Other`]
/// and contribute zero tokens; callers budget a safety margin for non-text
/// parts themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPart {
    Text {
        value: String,
    },
    Image {
        #[serde(default)]
        media_type: Option<String>,
        #[serde(default)]
        data: serde_json::Value,
    },
    #[serde(other)]
    Other,
}

impl ChatMessage {
    /// Create a plain-text message
    pub fn text(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Create a message from an ordered part list
    pub fn parts(role: Role, parts: Vec<ContentPart>) -> Self {
        Self {
            role,
            content: MessageContent::Parts(parts),
        }
    }
}

impl ContentPart {
    /// Text carried by this part, if any
    pub fn text_value(&self) -> Option<&str> {
        match self {
            ContentPart::Text { value } => Some(value),
            ContentPart::Image { .. } | ContentPart::Other => None,
        }
    }
}
