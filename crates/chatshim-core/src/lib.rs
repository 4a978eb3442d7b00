pub mod types;
pub mod chat;
pub mod responses;

pub use types::{Role, ReasoningEffort};

pub use chat::{
    ChatRequest,
    ChatOptions,
    ChatResult,
    ChatChoice,
    ChatMessage,
    ChatUsage,
};

pub use responses::{
    GenerateRequest,
    GenerateResult,
};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
