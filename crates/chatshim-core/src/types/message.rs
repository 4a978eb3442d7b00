use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Message role in a chat conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::Tool => write!(f, "tool"),
        }
    }
}

impl Role {
    /// Build a `{role, content}` message record for this role
    pub fn message(self, content: impl Into<String>) -> Value {
        json!({
            "role": self.to_string(),
            "content": content.into(),
        })
    }
}

/// Create a system message record
pub fn system(content: impl Into<String>) -> Value {
    Role::System.message(content)
}

/// Create a user message record
pub fn user(content: impl Into<String>) -> Value {
    Role::User.message(content)
}

/// Create an assistant message record
pub fn assistant(content: impl Into<String>) -> Value {
    Role::Assistant.message(content)
}

/// Read the `role` field of a message record, if it has one
pub fn role_of(record: &Value) -> Option<&str> {
    record.get("role").and_then(Value::as_str)
}

/// Read the `content` field of a message record when it is plain text
pub fn content_of(record: &Value) -> Option<&str> {
    record.get("content").and_then(Value::as_str)
}
