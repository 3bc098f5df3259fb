//! Shared data model for TutorBot transcript tooling.
//!
//! These types mirror the JSON envelope produced by the TutorBot server's
//! `/conversation-data` endpoint:
//!
//! ```json
//! {
//!   "messages": [
//!     { "role": "user", "content": "...", "token_info": null, "timestamp": "..." }
//!   ],
//!   "metadata": {
//!     "class_name": "...", "lesson": "...", "action_plan": "...",
//!     "timestamp": "...", "session_id": "...", "conversation_id": "..."
//!   }
//! }
//! ```
//!
//! Every field is defaulted so a sparse or older envelope still
//! deserializes; missing display strings never surface as errors.

use serde::{Deserialize, Serialize};

/// Sender of a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Display label used in exported documents.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "TutorBot",
        }
    }
}

/// One chat message in transcript order.
///
/// Ordering is positional; messages have no identity beyond their index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: Role,

    /// Raw message text, possibly multi-line markdown. Missing content is
    /// normalized to an empty string rather than dropped.
    #[serde(default)]
    pub content: String,

    /// Token-usage annotation, e.g. "Input: 10 | Output: 20 | Iterations: 1".
    /// Only assistant messages carry one, by convention.
    #[serde(default)]
    pub token_info: Option<String>,

    /// ISO-8601 timestamp; absent or malformed values display as empty.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Message {
    /// Creates a user message with the given content.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            token_info: None,
            timestamp: None,
        }
    }

    /// Creates an assistant message with the given content.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            token_info: None,
            timestamp: None,
        }
    }
}

/// Conversation metadata shown in the export title section.
///
/// All values are opaque display strings. The server substitutes
/// "Unknown" for unset class/lesson/plan selections; the identifiers stay
/// optional and render as "N/A" when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConversationMetadata {
    pub class_name: String,
    pub lesson: String,
    pub action_plan: String,
    /// Server-side export timestamp ("%Y-%m-%d %H:%M:%S").
    pub timestamp: Option<String>,
    pub session_id: Option<String>,
    pub conversation_id: Option<String>,
}

impl Default for ConversationMetadata {
    fn default() -> Self {
        Self {
            class_name: "Unknown".to_string(),
            lesson: "Unknown".to_string(),
            action_plan: "Unknown".to_string(),
            timestamp: None,
            session_id: None,
            conversation_id: None,
        }
    }
}

/// The full conversation-data envelope: metadata plus ordered messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConversationData {
    pub metadata: ConversationMetadata,
    pub messages: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_envelope_deserializes() {
        let json = r#"{
            "messages": [
                { "role": "user", "content": "Hi", "token_info": null, "timestamp": "2026-08-23T14:00:00Z" },
                { "role": "assistant", "content": "Hello!", "token_info": "Input: 10 | Output: 20 | Iterations: 1", "timestamp": null }
            ],
            "metadata": {
                "class_name": "Biology 101",
                "lesson": "Photosynthesis",
                "action_plan": "Review",
                "timestamp": "2026-08-23 14:00:00",
                "session_id": "sess-1",
                "conversation_id": "conv-9"
            }
        }"#;

        let data: ConversationData = serde_json::from_str(json).unwrap();
        assert_eq!(data.messages.len(), 2);
        assert_eq!(data.messages[0].role, Role::User);
        assert_eq!(
            data.messages[1].token_info.as_deref(),
            Some("Input: 10 | Output: 20 | Iterations: 1")
        );
        assert_eq!(data.metadata.conversation_id.as_deref(), Some("conv-9"));
    }

    #[test]
    fn test_sparse_envelope_uses_defaults() {
        let data: ConversationData = serde_json::from_str("{}").unwrap();
        assert!(data.messages.is_empty());
        assert_eq!(data.metadata.class_name, "Unknown");
        assert_eq!(data.metadata.session_id, None);
    }

    #[test]
    fn test_message_missing_content_is_empty() {
        let msg: Message = serde_json::from_str(r#"{ "role": "assistant" }"#).unwrap();
        assert_eq!(msg.content, "");
        assert_eq!(msg.token_info, None);
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let json = r#"{ "metadata": {}, "messages": [], "extra": 42 }"#;
        let data: ConversationData = serde_json::from_str(json).unwrap();
        assert!(data.messages.is_empty());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "You");
        assert_eq!(Role::Assistant.label(), "TutorBot");
    }
}
