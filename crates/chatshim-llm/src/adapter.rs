//! Responses-to-chat adapter.
//!
//! A `generate` call is gathered into a chat request, dispatched once to the
//! backend, and the chat result is scattered back into a `GenerateResult`.

use chatshim_core::chat::{ChatOptions, ChatRequest, ChatResult};
use chatshim_core::responses::{GenerateRequest, GenerateResult};
use chatshim_core::types::{message, ReasoningEffort};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::backend::ChatBackend;
use crate::config::{AdapterConfig, FieldPolicy};
use crate::error::{LLMError, Result};

/// Adapter exposing the responses shape over a chat-only backend
pub struct ResponsesAdapter<B> {
    backend: B,
    config: AdapterConfig,
}

impl<B: ChatBackend> ResponsesAdapter<B> {
    /// Create an adapter with the default configuration
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, AdapterConfig::default())
    }

    /// Create an adapter with a custom configuration
    pub fn with_config(backend: B, config: AdapterConfig) -> Self {
        Self { backend, config }
    }

    /// Get the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the config
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Generate a response through the backend
    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerateResult> {
        generate_with(&self.backend, request, &self.config).await
    }
}

/// Generate a response with the default configuration
pub async fn generate<B>(backend: &B, request: GenerateRequest) -> Result<GenerateResult>
where
    B: ChatBackend + ?Sized,
{
    generate_with(backend, request, &AdapterConfig::default()).await
}

/// Generate a response with an explicit configuration
pub async fn generate_with<B>(
    backend: &B,
    request: GenerateRequest,
    config: &AdapterConfig,
) -> Result<GenerateResult>
where
    B: ChatBackend + ?Sized,
{
    let chat_request = build_chat_request(&request, config)?;

    debug!(
        backend = backend.backend_id(),
        model = %chat_request.model,
        messages = chat_request.messages.len(),
        options = ?chat_request.options.set_fields(),
        "dispatching chat completion"
    );

    let chat_result = backend.chat_completion(chat_request).await?;

    Ok(scatter(chat_result, request.metadata))
}

/// Build the chat request for a generate request
pub fn build_chat_request(request: &GenerateRequest, config: &AdapterConfig) -> Result<ChatRequest> {
    let instructions = request
        .instructions
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(config.default_instructions.as_deref());

    let messages = gather_messages(&request.input, instructions)?;

    Ok(ChatRequest::new(request.model.clone())
        .with_messages(messages)
        .with_options(map_options(request, config.field_policy))
        .with_extra(request.extra.clone()))
}

/// Assemble the ordered message list.
///
/// A string input becomes a single user message; an array is taken as
/// already role-tagged records and appended in order without inspection.
pub fn gather_messages(input: &Value, instructions: Option<&str>) -> Result<Vec<Value>> {
    let mut messages = Vec::new();

    if let Some(instructions) = instructions.filter(|s| !s.is_empty()) {
        messages.push(message::system(instructions));
    }

    match input {
        Value::String(text) => messages.push(message::user(text.as_str())),
        Value::Array(records) => messages.extend(records.iter().cloned()),
        other => {
            warn!(kind = json_kind(other), "rejecting generate input");
            return Err(LLMError::InvalidArgument(
                "'input' value must be a string or list of messages".to_string(),
            ));
        }
    }

    Ok(messages)
}

/// Map responses-shape options onto chat options under a field policy
pub fn map_options(request: &GenerateRequest, policy: FieldPolicy) -> ChatOptions {
    ChatOptions {
        temperature: admit(&request.temperature, policy),
        top_p: admit(&request.top_p, policy),
        max_tokens: admit(&request.max_output_tokens, policy),
        modalities: admit(&request.modalities, policy),
        store: admit(&request.store, policy),
        reasoning_effort: admit(&request.reasoning_effort, policy),
        metadata: admit(&request.metadata, policy),
    }
}

fn scatter(chat_result: ChatResult, metadata: Option<Map<String, Value>>) -> GenerateResult {
    if chat_result.choices.is_empty() {
        warn!(id = %chat_result.id, "chat result has no choices");
    }

    let result = GenerateResult::from_chat(chat_result, metadata);
    debug!(
        id = %result.id,
        has_output_text = result.output_text.is_some(),
        has_audio = result.has_audio(),
        "reshaped chat result"
    );
    result
}

fn admit<T: Truthy + Clone>(value: &Option<T>, policy: FieldPolicy) -> Option<T> {
    value
        .as_ref()
        .filter(|v| policy == FieldPolicy::Provided || v.is_truthy())
        .cloned()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Truthiness of an optional field value
trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for u32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for Vec<String> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for ReasoningEffort {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for Map<String, Value> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}
