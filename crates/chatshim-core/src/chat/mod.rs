pub mod request;
pub mod response;

pub use request::{ChatRequest, ChatOptions};
pub use response::{ChatResult, ChatChoice, ChatMessage, ChatUsage};
