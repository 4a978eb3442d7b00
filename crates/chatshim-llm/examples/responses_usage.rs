//! Example: Calling a chat-only backend through the responses shape
//!
//! The backend here echoes the last user message back, standing in for a
//! real chat completions client.

use async_trait::async_trait;
use chatshim_core::types::message;
use chatshim_core::{ChatMessage, ChatRequest, ChatResult, ChatUsage, GenerateRequest};
use chatshim_llm::{AdapterConfig, ChatBackend, ResponsesAdapter, ResponsesExt, Result};
use serde_json::json;

struct EchoBackend;

#[async_trait]
impl ChatBackend for EchoBackend {
    fn backend_id(&self) -> &str {
        "echo"
    }

    async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResult> {
        let last = request
            .messages
            .iter()
            .rev()
            .find(|m| message::role_of(m) == Some("user"))
            .and_then(message::content_of)
            .unwrap_or_default()
            .to_string();

        Ok(ChatResult::new("chatcmpl-echo", request.model, 1700000000)
            .with_choice(ChatMessage::assistant(last))
            .with_usage(ChatUsage::new(8, 8)))
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // =========================================================================
    // Example 1: Namespace on the backend
    // =========================================================================
    println!("=== Example 1: backend.responses().create(...) ===");

    let backend = EchoBackend;
    let response = backend
        .responses()
        .create(
            GenerateRequest::new("llama-3", "In one sentence, tell me about Stan Laurel")
                .temperature(2.0),
        )
        .await?;
    println!("{}", response);
    println!("output_text: {}", response.text());

    // =========================================================================
    // Example 2: Adapter built at startup, message list input
    // =========================================================================
    println!("\n=== Example 2: ResponsesAdapter ===");

    let config = AdapterConfig::from_json(r#"{"default_instructions": "You are terse."}"#)?;
    let adapter = ResponsesAdapter::with_config(EchoBackend, config);

    let input = vec![
        json!({"role": "user", "content": "Name a silent film star."}),
        json!({"role": "assistant", "content": "Buster Keaton."}),
        json!({"role": "user", "content": "Another one?"}),
    ];
    let response = adapter.generate(GenerateRequest::new("llama-3", input)).await?;
    println!("{}", serde_json::to_string_pretty(&response.to_map())?);

    Ok(())
}
