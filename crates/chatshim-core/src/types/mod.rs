pub mod message;
pub mod effort;

pub use message::Role;
pub use effort::ReasoningEffort;
