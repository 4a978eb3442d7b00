use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::Role;

/// Chat completion result as returned by a backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    pub id: String,
    pub model: String,
    /// Unix timestamp in seconds
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<ChatUsage>,
}

impl ChatResult {
    /// Create a new result with no choices
    pub fn new(id: impl Into<String>, model: impl Into<String>, created: i64) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            created,
            choices: Vec::new(),
            usage: None,
        }
    }

    /// Append a choice
    pub fn with_choice(mut self, message: ChatMessage) -> Self {
        let index = self.choices.len() as u32;
        self.choices.push(ChatChoice {
            index,
            message,
            finish_reason: Some("stop".to_string()),
        });
        self
    }

    /// Set usage
    pub fn with_usage(mut self, usage: ChatUsage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Message of the first choice, if any
    pub fn first_message(&self) -> Option<&ChatMessage> {
        self.choices.first().map(|c| &c.message)
    }
}

/// A single completion choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ChatMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Assistant message inside a choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Value>,
    /// Fields this crate does not model (tool calls, refusals, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_role() -> Role {
    Role::Assistant
}

impl ChatMessage {
    /// Create an assistant message with text content
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: Some(content.into()),
            audio: None,
            extra: Map::new(),
        }
    }

    /// Attach audio output
    pub fn with_audio(mut self, audio: Value) -> Self {
        self.audio = Some(audio);
        self
    }
}

/// Token usage information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

impl ChatUsage {
    /// Create new usage info
    pub fn new(prompt: u32, completion: u32) -> Self {
        Self {
            prompt_tokens: prompt,
            completion_tokens: completion,
            total_tokens: prompt.saturating_add(completion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_chat_completion_body() {
        let body = json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello there", "refusal": null},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 9, "completion_tokens": 3, "total_tokens": 12}
        });

        let result: ChatResult = serde_json::from_value(body).unwrap();
        assert_eq!(result.id, "chatcmpl-123");
        assert_eq!(result.created, 1700000000);
        let message = result.first_message().unwrap();
        assert_eq!(message.content.as_deref(), Some("Hello there"));
        assert!(message.audio.is_none());
        assert!(message.extra.contains_key("refusal"));
        assert_eq!(result.usage, Some(ChatUsage::new(9, 3)));
    }

    #[test]
    fn test_missing_choices_is_empty() {
        let result: ChatResult =
            serde_json::from_value(json!({"id": "x", "model": "m"})).unwrap();
        assert!(result.choices.is_empty());
        assert!(result.first_message().is_none());
        assert!(result.usage.is_none());
    }

    #[test]
    fn test_null_audio_is_absent() {
        let message: ChatMessage =
            serde_json::from_value(json!({"content": "hi", "audio": null})).unwrap();
        assert_eq!(message.role, Role::Assistant);
        assert!(message.audio.is_none());
    }

    #[test]
    fn test_chat_usage() {
        let usage = ChatUsage::new(10, 20);
        assert_eq!(usage.total_tokens, 30);
    }

    #[test]
    fn test_chat_usage_saturates() {
        let usage = ChatUsage::new(u32::MAX, 5);
        assert_eq!(usage.total_tokens, u32::MAX);
    }
}
