use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::chat::{ChatChoice, ChatResult, ChatUsage};

/// Maximum number of characters of output shown by `Display`
const PREVIEW_CHARS: usize = 50;

/// Result in the unified "responses" shape, built from a chat completion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateResult {
    pub id: String,
    pub model: String,
    pub created: i64,
    /// Original choices, kept for callers that need more than the first one
    pub choices: Vec<ChatChoice>,
    pub usage: Option<ChatUsage>,
    /// Metadata the caller supplied with the request
    pub metadata: Option<Map<String, Value>>,
    pub output_text: Option<String>,
    pub output_audio: Option<Value>,
    /// The untouched backend result
    #[serde(skip)]
    pub raw: ChatResult,
}

impl GenerateResult {
    /// Reshape a chat completion result.
    ///
    /// `metadata` is always the caller's own metadata; nothing from the chat
    /// result is used for it.
    pub fn from_chat(raw: ChatResult, metadata: Option<Map<String, Value>>) -> Self {
        let (output_text, output_audio) = match raw.first_message() {
            Some(message) => (message.content.clone(), message.audio.clone()),
            None => (None, None),
        };

        Self {
            id: raw.id.clone(),
            model: raw.model.clone(),
            created: raw.created,
            choices: raw.choices.clone(),
            usage: raw.usage.clone(),
            metadata,
            output_text,
            output_audio,
            raw,
        }
    }

    /// Output text, or an empty string when the backend produced none
    pub fn text(&self) -> &str {
        self.output_text.as_deref().unwrap_or_default()
    }

    /// Check if the first choice carried audio
    pub fn has_audio(&self) -> bool {
        self.output_audio.is_some()
    }

    /// Flat mapping projection.
    ///
    /// Always has `id`, `model`, `created`, `output_text` and `usage`;
    /// `metadata` and `output_audio` only appear when present and non-empty.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".to_string(), json!(self.id));
        map.insert("model".to_string(), json!(self.model));
        map.insert("created".to_string(), json!(self.created));
        map.insert("output_text".to_string(), json!(self.output_text));
        map.insert("usage".to_string(), json!(self.usage));

        if let Some(metadata) = self.metadata.as_ref().filter(|m| !m.is_empty()) {
            map.insert("metadata".to_string(), Value::Object(metadata.clone()));
        }
        if let Some(audio) = self.output_audio.as_ref().filter(|a| is_truthy(a)) {
            map.insert("output_audio".to_string(), audio.clone());
        }

        map
    }
}

/// Empty objects, arrays, strings, `false`, zero and null are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

impl std::fmt::Display for GenerateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let preview: String = match &self.output_text {
            Some(text) if !text.is_empty() => text.chars().take(PREVIEW_CHARS).collect(),
            _ => "None".to_string(),
        };
        write!(f, "Response(id={}, output_text={}...)", self.id, preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatMessage;

    fn chat_result(text: &str) -> ChatResult {
        ChatResult::new("chatcmpl-1", "gpt-4o", 1700000000)
            .with_choice(ChatMessage::assistant(text))
            .with_usage(ChatUsage::new(5, 7))
    }

    #[test]
    fn test_from_chat_copies_fields() {
        let raw = chat_result("hi");
        let result = GenerateResult::from_chat(raw.clone(), None);

        assert_eq!(result.id, "chatcmpl-1");
        assert_eq!(result.model, "gpt-4o");
        assert_eq!(result.created, 1700000000);
        assert_eq!(result.choices, raw.choices);
        assert_eq!(result.usage, Some(ChatUsage::new(5, 7)));
        assert_eq!(result.output_text.as_deref(), Some("hi"));
        assert!(!result.has_audio());
        assert_eq!(result.raw, raw);
    }

    #[test]
    fn test_audio_from_first_choice() {
        let audio = json!({"id": "audio_1", "data": "UklGRg=="});
        let raw = ChatResult::new("c", "gpt-4o-audio", 0)
            .with_choice(ChatMessage::assistant("spoken").with_audio(audio.clone()))
            .with_choice(ChatMessage::assistant("second"));

        let result = GenerateResult::from_chat(raw, None);
        assert_eq!(result.output_text.as_deref(), Some("spoken"));
        assert_eq!(result.output_audio, Some(audio));
    }

    #[test]
    fn test_empty_choices() {
        let result = GenerateResult::from_chat(ChatResult::new("c", "m", 0), None);
        assert!(result.output_text.is_none());
        assert!(result.output_audio.is_none());
        assert_eq!(result.text(), "");
    }

    #[test]
    fn test_display_truncates_preview() {
        let long = "a".repeat(80);
        let result = GenerateResult::from_chat(chat_result(&long), None);
        assert_eq!(
            result.to_string(),
            format!("Response(id=chatcmpl-1, output_text={}...)", "a".repeat(50))
        );
    }

    #[test]
    fn test_display_counts_characters() {
        let text = "é".repeat(60);
        let result = GenerateResult::from_chat(chat_result(&text), None);
        let rendered = result.to_string();
        assert!(rendered.contains(&"é".repeat(50)));
        assert!(!rendered.contains(&"é".repeat(51)));
    }

    #[test]
    fn test_display_without_output() {
        let result = GenerateResult::from_chat(ChatResult::new("c", "m", 0), None);
        assert_eq!(result.to_string(), "Response(id=c, output_text=None...)");
    }

    #[test]
    fn test_to_map_omits_absent_keys() {
        let result = GenerateResult::from_chat(chat_result("hi"), None);
        let map = result.to_map();

        assert_eq!(map["id"], "chatcmpl-1");
        assert_eq!(map["output_text"], "hi");
        assert_eq!(map["usage"]["total_tokens"], 12);
        assert!(!map.contains_key("metadata"));
        assert!(!map.contains_key("output_audio"));
    }

    #[test]
    fn test_to_map_includes_present_keys() {
        let mut metadata = Map::new();
        metadata.insert("user".to_string(), json!("u-1"));
        let raw = ChatResult::new("c", "m", 0)
            .with_choice(ChatMessage::assistant("hi").with_audio(json!({"id": "a"})));

        let map = GenerateResult::from_chat(raw, Some(metadata)).to_map();
        assert_eq!(map["metadata"]["user"], "u-1");
        assert_eq!(map["output_audio"]["id"], "a");
    }

    #[test]
    fn test_to_map_treats_empty_audio_as_absent() {
        let raw = ChatResult::new("c", "m", 0)
            .with_choice(ChatMessage::assistant("hi").with_audio(json!({})));

        let result = GenerateResult::from_chat(raw, None);
        assert!(result.has_audio());
        assert!(!result.to_map().contains_key("output_audio"));
    }

    #[test]
    fn test_to_map_treats_empty_metadata_as_absent() {
        let result = GenerateResult::from_chat(chat_result("hi"), Some(Map::new()));
        assert!(!result.to_map().contains_key("metadata"));
    }
}
