pub mod error;
pub mod config;
pub mod backend;
pub mod adapter;
pub mod client;

// Re-export core types
pub use error::{LLMError, Result};
pub use config::{AdapterConfig, FieldPolicy};
pub use backend::ChatBackend;
pub use adapter::{generate, generate_with, ResponsesAdapter};
pub use client::{Responses, ResponsesExt};
