use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::ReasoningEffort;

/// Request in the unified "responses" shape.
///
/// `input` is either a plain string or an array of role-tagged message
/// records. It is kept as raw JSON because requests can arrive from
/// deserialized bodies; the adapter rejects any other JSON kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub input: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modalities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<ReasoningEffort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Any other parameter, forwarded verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GenerateRequest {
    /// Create a request from a model name and an input (string or message records)
    pub fn new(model: impl Into<String>, input: impl Into<Value>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
            instructions: None,
            modalities: None,
            temperature: None,
            top_p: None,
            max_output_tokens: None,
            store: None,
            reasoning_effort: None,
            metadata: None,
            extra: Map::new(),
        }
    }

    /// Set system-level instructions
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Set requested output modalities
    pub fn modalities<I, S>(mut self, modalities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modalities = Some(modalities.into_iter().map(Into::into).collect());
        self
    }

    /// Set temperature (0.0 - 2.0)
    pub fn temperature(mut self, temp: f64) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set top_p (0.0 - 1.0)
    pub fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set max output tokens
    pub fn max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    /// Ask the backend to store the conversation
    pub fn store(mut self, store: bool) -> Self {
        self.store = Some(store);
        self
    }

    /// Set reasoning effort
    pub fn reasoning_effort(mut self, effort: impl Into<ReasoningEffort>) -> Self {
        self.reasoning_effort = Some(effort.into());
        self
    }

    /// Set caller metadata
    pub fn metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Add a pass-through parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let request = GenerateRequest::new("gpt-4o", "Tell me about Stan Laurel")
            .instructions("Answer in one sentence")
            .temperature(0.5)
            .max_output_tokens(64)
            .reasoning_effort("low")
            .param("seed", 42);

        assert_eq!(request.input, json!("Tell me about Stan Laurel"));
        assert_eq!(request.instructions.as_deref(), Some("Answer in one sentence"));
        assert_eq!(request.max_output_tokens, Some(64));
        assert_eq!(request.reasoning_effort, Some(ReasoningEffort::Low));
        assert_eq!(request.extra["seed"], json!(42));
    }

    #[test]
    fn test_message_list_input() {
        let input = vec![json!({"role": "user", "content": "hi"})];
        let request = GenerateRequest::new("gpt-4o", input);
        assert!(request.input.is_array());
    }

    #[test]
    fn test_deserialize_collects_unknown_params() {
        let request: GenerateRequest = serde_json::from_value(json!({
            "model": "gpt-4o",
            "input": "hello",
            "top_p": 0.5,
            "metadata": {"trace": "abc"},
            "frequency_penalty": 0.25
        }))
        .unwrap();

        assert_eq!(request.top_p, Some(0.5));
        assert_eq!(request.metadata.unwrap()["trace"], "abc");
        assert_eq!(request.extra.len(), 1);
        assert_eq!(request.extra["frequency_penalty"], json!(0.25));
    }
}
